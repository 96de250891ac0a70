use crate::core::data::TerraformPlan;
use crate::utils::error::{AppError, AppResult};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

/// Where the plan JSON comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanSource {
    Stdin,
    File(PathBuf),
}

impl PlanSource {
    /// `-` or no argument means stdin
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("-") | None => PlanSource::Stdin,
            Some(path) => PlanSource::File(PathBuf::from(path)),
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, PlanSource::Stdin)
    }

    pub fn describe(&self) -> String {
        match self {
            PlanSource::Stdin => "<stdin>".to_string(),
            PlanSource::File(path) => path.display().to_string(),
        }
    }

    pub fn read_to_string(&self) -> AppResult<String> {
        match self {
            PlanSource::Stdin => {
                if std::io::stdin().is_terminal() {
                    return Err(AppError::InvalidArgument(
                        "No plan file given and stdin is a terminal. Pipe `terraform show -json plan.out` into tfplan or pass a file path".to_string(),
                    ));
                }
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|e| AppError::Io(format!("Failed to read stdin: {}", e)))?;
                Ok(buffer)
            }
            PlanSource::File(path) => std::fs::read_to_string(path)
                .map_err(|e| AppError::Io(format!("{}: {}", path.display(), e))),
        }
    }

    pub fn load_plan(&self) -> AppResult<TerraformPlan> {
        let content = self.read_to_string()?;
        parse_plan(&content, &self.describe())
    }
}

/// Parse plan JSON, naming `origin` in the error
pub fn parse_plan(content: &str, origin: &str) -> AppResult<TerraformPlan> {
    TerraformPlan::from_json(content).map_err(|e| {
        AppError::Parse(format!(
            "{} is not valid Terraform plan JSON ({}). Generate it with `terraform show -json`",
            origin, e
        ))
    })
}
