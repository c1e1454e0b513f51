use indoc::formatdoc;

/// One `#SBATCH` directive as a (name, value) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOption {
    pub name: &'static str,
    pub value: String,
}

/// Everything needed to render one job script.
#[derive(Debug, Clone)]
pub struct ScriptInfo {
    pub basename: String,
    pub walltime_hours: String,
    pub program: String,
    pub arguments: Vec<String>,
}

impl ScriptInfo {
    /// Batch options in the order they appear in the script. The scheduler
    /// reads these as resource directives; the order is part of the format.
    pub fn batch_options(&self) -> [BatchOption; 6] {
        let opt = |name: &'static str, value: String| BatchOption { name, value };
        [
            opt("output", format!("{}.out", self.basename)),
            opt("error", format!("{}.err", self.basename)),
            opt("time", format!("{}:00:00", self.walltime_hours)),
            opt("nodes", "1".to_owned()),
            opt("ntasks", "1".to_owned()),
            opt("ntasks-per-node", "1".to_owned()),
        ]
    }

    /// Render the job script text. Arguments are inserted verbatim, joined by
    /// single spaces; callers own shell-safe values.
    pub fn render(&self) -> String {
        let directives = self
            .batch_options()
            .iter()
            .map(|opt| format!("#SBATCH --{} {}", opt.name, opt.value))
            .collect::<Vec<_>>()
            .join("\n");
        formatdoc! {r#"
            #!/usr/bin/env sh
            {directives}

            ./{program} {arguments}
        "#,
            program = self.program,
            arguments = self.arguments.join(" "),
        }
    }
}

/// Derive the artifact basename from the suffix the simulation program
/// reports: drop the trailing extension segment and prefix the result. A
/// suffix without an extension is kept whole.
pub fn job_basename(prefix: &str, suffix: &str) -> String {
    let stem = match suffix.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => suffix,
    };
    format!("{prefix}{stem}")
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    fn info(args: &[&str]) -> ScriptInfo {
        ScriptInfo {
            basename: "networkfoo.bar".to_owned(),
            walltime_hours: "5".to_owned(),
            program: "simulate.exe".to_owned(),
            arguments: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn basename_drops_extension() {
        assert_eq!(job_basename("network", "foo.bar.net"), "networkfoo.bar");
        assert_eq!(job_basename("network", "foo.net"), "networkfoo");
    }

    #[test]
    fn basename_without_extension_is_kept_whole() {
        assert_eq!(job_basename("network", "foo"), "networkfoo");
    }

    #[test]
    fn batch_options_order_is_fixed() {
        let names: Vec<&str> =
            info(&[]).batch_options().iter().map(|opt| opt.name).collect();
        assert_eq!(
            names,
            ["output", "error", "time", "nodes", "ntasks", "ntasks-per-node"]
        );
    }

    #[test]
    fn time_directive_uses_whole_hours() {
        let options = info(&[]).batch_options();
        assert_eq!(options[2].value, "5:00:00");
    }

    #[test]
    fn render_is_byte_exact() {
        let expected = indoc! {r#"
            #!/usr/bin/env sh
            #SBATCH --output networkfoo.bar.out
            #SBATCH --error networkfoo.bar.err
            #SBATCH --time 5:00:00
            #SBATCH --nodes 1
            #SBATCH --ntasks 1
            #SBATCH --ntasks-per-node 1

            ./simulate.exe alpha beta
        "#};
        assert_eq!(info(&["alpha", "beta"]).render(), expected);
    }

    #[test]
    fn render_is_pure() {
        let info = info(&["alpha"]);
        assert_eq!(info.render(), info.render());
    }
}
