//! Assemble a cmdlet invocation from snake_case arguments.
//!
//! ```
//! use hyperv_shell::CommandLine;
//!
//! let line = CommandLine::new("Get-VM")
//!     .arg("computer_name", "hv01")
//!     .arg("name", "web 01")
//!     .select(["vm_name", "state"])
//!     .render();
//!
//! assert_eq!(
//!     line,
//!     "Get-VM -ComputerName hv01 -Name \"web 01\" | Select-Object -Property VmName,State | ConvertTo-Json -Compress"
//! );
//! ```

use crate::defaults::Defaults;
use crate::naming::pascalize;
use crate::shell;
use crate::value::{Mapping, Scalar, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
enum JsonOutput {
    Skip,
    Convert { depth: Option<u32>, compress: bool },
}

#[derive(Debug, Clone)]
pub struct CommandLine {
    cmdlet: String,
    args: Vec<(String, Value)>,
    select: Vec<String>,
    json: JsonOutput,
}

impl CommandLine {
    pub fn new(cmdlet: impl Into<String>) -> Self {
        Self {
            cmdlet: cmdlet.into(),
            args: Vec::new(),
            select: Vec::new(),
            json: JsonOutput::Convert {
                depth: None,
                compress: true,
            },
        }
    }

    /// Start a command line with JSON settings taken from configuration.
    pub fn from_defaults(cmdlet: impl Into<String>, defaults: &Defaults) -> Self {
        let mut line = Self::new(cmdlet);
        line.json = JsonOutput::Convert {
            depth: defaults.command.json_depth,
            compress: defaults.command.compress_json,
        };
        line
    }

    /// Add one argument. `name` is snake_case and rendered as `-PascalName`.
    ///
    /// Nil, `false` and empty-string values are dropped, as are names starting
    /// with `_`. `true` renders as a bare switch. Re-adding a name replaces it.
    pub fn arg(mut self, name: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        if name.starts_with('_') || is_omitted(&value) {
            return self;
        }

        let name = pascalize(name);
        match self.args.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.args.push((name, value)),
        }
        self
    }

    /// Add every entry of a snake_case mapping, in order.
    pub fn args(self, args: &Mapping) -> Self {
        args.iter()
            .fold(self, |line, (key, value)| line.arg(key.name(), value.clone()))
    }

    /// Restrict output to these (snake_case) properties.
    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.select
            .extend(fields.into_iter().map(|field| pascalize(field.as_ref())));
        self
    }

    pub fn json_depth(mut self, depth: Option<u32>) -> Self {
        let compress = match self.json {
            JsonOutput::Convert { compress, .. } => compress,
            JsonOutput::Skip => true,
        };
        self.json = JsonOutput::Convert { depth, compress };
        self
    }

    /// Leave the cmdlet's output as-is instead of piping it through `ConvertTo-Json`.
    pub fn no_json(mut self) -> Self {
        self.json = JsonOutput::Skip;
        self
    }

    pub fn cmdlet(&self) -> &str {
        &self.cmdlet
    }

    /// The cmdlet and its arguments, without the output pipeline.
    pub fn invocation(&self) -> String {
        let mut parts = vec![self.cmdlet.clone()];
        for (name, value) in &self.args {
            match value {
                Value::Scalar(Scalar::Bool(true)) => parts.push(format!("-{}", name)),
                _ => parts.push(format!("-{} {}", name, shell::quote(value, false))),
            }
        }
        parts.join(" ")
    }

    pub fn render(&self) -> String {
        let mut parts = vec![self.invocation()];

        if !self.select.is_empty() {
            parts.push(format!("| Select-Object -Property {}", self.select.join(",")));
        }

        if let JsonOutput::Convert { depth, compress } = &self.json {
            let mut convert = String::from("| ConvertTo-Json");
            if *compress {
                convert.push_str(" -Compress");
            }
            if let Some(depth) = depth {
                convert.push_str(&format!(" -Depth {}", depth));
            }
            parts.push(convert);
        }

        parts.join(" ")
    }

    /// Context string for [`crate::CommandOutput::check`].
    pub fn failure_context(&self) -> String {
        format!("When executing {}", self.invocation())
    }
}

fn is_omitted(value: &Value) -> bool {
    match value {
        Value::Scalar(Scalar::Nil) | Value::Scalar(Scalar::Bool(false)) => true,
        Value::Scalar(Scalar::String(s)) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::CommandDefaults;
    use crate::value::Identifier;

    #[test]
    fn bare_cmdlet() {
        assert_eq!(
            CommandLine::new("Get-VMHost").render(),
            "Get-VMHost | ConvertTo-Json -Compress"
        );
    }

    #[test]
    fn arguments_are_pascalized_and_quoted() {
        let line = CommandLine::new("New-VM")
            .arg("name", "web 01")
            .arg("memory_startup_bytes", 536870912i64)
            .arg("switch_name", "External")
            .no_json();
        assert_eq!(
            line.render(),
            "New-VM -Name \"web 01\" -MemoryStartupBytes 536870912 -SwitchName External"
        );
    }

    #[test]
    fn true_is_a_switch_and_false_is_dropped() {
        let line = CommandLine::new("Stop-VM")
            .arg("name", "web01")
            .arg("force", true)
            .arg("turn_off", false)
            .no_json();
        assert_eq!(line.render(), "Stop-VM -Name web01 -Force");
    }

    #[test]
    fn nil_empty_and_private_arguments_are_dropped() {
        let line = CommandLine::new("Get-VM")
            .arg("name", Value::nil())
            .arg("computer_name", "")
            .arg("_return_fields", "name")
            .no_json();
        assert_eq!(line.render(), "Get-VM");
    }

    #[test]
    fn sequences_render_as_arrays() {
        let line = CommandLine::new("Get-VM")
            .arg("name", vec!["web01", "web02"])
            .no_json();
        assert_eq!(line.render(), "Get-VM -Name @(\"web01\", \"web02\")");
    }

    #[test]
    fn variables_pass_through() {
        let line = CommandLine::new("Start-VM").arg("vm", "$vm").no_json();
        assert_eq!(line.render(), "Start-VM -Vm $vm");
    }

    #[test]
    fn repeated_argument_replaces() {
        let line = CommandLine::new("Get-VM")
            .arg("name", "a")
            .arg("name", "b")
            .no_json();
        assert_eq!(line.render(), "Get-VM -Name b");
    }

    #[test]
    fn args_from_mapping_keep_order() {
        let args = Mapping::new()
            .with(Identifier::symbol("computer_name"), "hv01")
            .with(Identifier::symbol("vm_name"), "db")
            .with(Identifier::symbol("passthru"), true);
        let line = CommandLine::new("Checkpoint-VM").args(&args).no_json();
        assert_eq!(
            line.render(),
            "Checkpoint-VM -ComputerName hv01 -VmName db -Passthru"
        );
    }

    #[test]
    fn select_and_depth() {
        let line = CommandLine::new("Get-VM")
            .select(["name", "memory_assigned"])
            .json_depth(Some(3));
        assert_eq!(
            line.render(),
            "Get-VM | Select-Object -Property Name,MemoryAssigned | ConvertTo-Json -Compress -Depth 3"
        );
    }

    #[test]
    fn from_defaults_uses_config() {
        let defaults = Defaults {
            command: CommandDefaults {
                json_depth: Some(5),
                compress_json: false,
            },
        };
        let line = CommandLine::from_defaults("Get-VMSwitch", &defaults);
        assert_eq!(line.render(), "Get-VMSwitch | ConvertTo-Json -Depth 5");
    }

    #[test]
    fn failure_context_names_invocation() {
        let line = CommandLine::new("Remove-VM").arg("name", "old vm").arg("force", true);
        assert_eq!(
            line.failure_context(),
            "When executing Remove-VM -Name \"old vm\" -Force"
        );
    }
}
