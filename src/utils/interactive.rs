use anyhow::Result;
use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

use crate::core::data::{Action, ResourceChange, TerraformPlan};
use crate::core::diff::attribute_changes;
use crate::utils::output::{resource_headline, write_attribute_lines, OutputStyle, Painter};

pub const INSTRUCTIONS: &str =
    "Interactive Plan (Enter number to toggle, 'a' for all, 'c' to collapse all, 'q' to quit):";

pub fn prompt_input(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

pub fn prompt_yes_no(prompt: &str) -> Result<bool> {
    loop {
        let input = prompt_input(&format!("{} [y/N]: ", prompt))?;
        match input.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => println!("Please enter 'y' or 'n'"),
        }
    }
}

/// A command typed at the interactive prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractiveCommand {
    Toggle(usize),
    ExpandAll,
    CollapseAll,
    Quit,
    Ignored,
}

impl InteractiveCommand {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "q" => InteractiveCommand::Quit,
            "a" => InteractiveCommand::ExpandAll,
            "c" => InteractiveCommand::CollapseAll,
            n => n
                .parse::<usize>()
                .map(InteractiveCommand::Toggle)
                .unwrap_or(InteractiveCommand::Ignored),
        }
    }
}

/// Expand/collapse state over the listed resources of a plan
pub struct InteractiveSession<'a> {
    resources: Vec<(&'a ResourceChange, Action)>,
    expanded: BTreeSet<usize>,
    color: bool,
}

impl<'a> InteractiveSession<'a> {
    pub fn new(plan: &'a TerraformPlan, color: bool) -> Self {
        Self {
            resources: plan.listed_changes(),
            expanded: BTreeSet::new(),
            color,
        }
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Apply a command; returns false once the session should end
    pub fn apply(&mut self, command: InteractiveCommand) -> bool {
        match command {
            InteractiveCommand::Quit => return false,
            InteractiveCommand::ExpandAll => self.expanded.extend(0..self.resources.len()),
            InteractiveCommand::CollapseAll => self.expanded.clear(),
            InteractiveCommand::Toggle(idx) if idx < self.resources.len() => {
                if !self.expanded.remove(&idx) {
                    self.expanded.insert(idx);
                }
            }
            InteractiveCommand::Toggle(_) | InteractiveCommand::Ignored => {}
        }
        true
    }

    /// Render one frame of the resource list
    pub fn render(&self) -> String {
        let painter = Painter::new(self.color);
        let mut out = format!("{}\n\n", INSTRUCTIONS);

        for (i, (change, action)) in self.resources.iter().enumerate() {
            let is_expanded = self.is_expanded(i);
            let indicator = if is_expanded { "▼" } else { "▶" };
            out.push_str(&format!(
                "{} {} {}\n",
                painter.paint(&format!("[{}]", i), OutputStyle::info),
                painter.paint(indicator, OutputStyle::muted),
                resource_headline(change, *action, painter)
            ));
            if is_expanded {
                write_attribute_lines(&mut out, &attribute_changes(&change.change, *action), painter);
            }
            out.push('\n');
        }
        out
    }

    /// Drive the session from a line reader until `q` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W, clear_screen: bool) -> Result<()> {
        loop {
            if clear_screen {
                execute!(output, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
            }
            write!(output, "{}", self.render())?;
            write!(output, "\nCommand: ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            if !self.apply(InteractiveCommand::parse(&line)) {
                break;
            }
        }
        Ok(())
    }
}
