use domain::model::entity::SubmitRequest;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("missing required walltime argument")]
pub struct UsageError;

/// One-line usage text, mirroring the argument order the parser accepts.
pub fn usage(prog: &str, flag: &str) -> String {
    format!("usage: {prog} [{flag}] walltime_in_hours [simulation arguments]")
}

/// Split the raw argument list (program name excluded) into a request. The
/// build marker may appear anywhere; exactly one occurrence is consumed, the
/// order of everything else is untouched. The first remaining argument is the
/// walltime, the rest pass through to the simulation program.
pub fn parse(
    args: impl IntoIterator<Item = String>,
    flag: &str,
) -> Result<SubmitRequest, UsageError> {
    let mut args: Vec<String> = args.into_iter().collect();
    let build_flag = match args.iter().position(|arg| arg == flag) {
        Some(at) => {
            args.remove(at);
            true
        }
        None => false,
    };
    if args.is_empty() {
        return Err(UsageError);
    }
    let walltime_hours = args.remove(0);
    Ok(SubmitRequest {
        walltime_hours,
        build_flag,
        sim_args: args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn walltime_then_passthrough() {
        let request = parse(args(&["5", "alpha", "beta"]), "whide").unwrap();
        assert_eq!(request.walltime_hours, "5");
        assert!(!request.build_flag);
        assert_eq!(request.sim_args, args(&["alpha", "beta"]));
    }

    #[test]
    fn marker_is_position_independent() {
        for raw in [
            &["whide", "5", "alpha"],
            &["5", "whide", "alpha"],
            &["5", "alpha", "whide"],
        ] {
            let request = parse(args(raw), "whide").unwrap();
            assert!(request.build_flag);
            assert_eq!(request.walltime_hours, "5");
            assert_eq!(request.sim_args, args(&["alpha"]));
        }
    }

    #[test]
    fn only_first_marker_occurrence_is_consumed() {
        let request = parse(args(&["whide", "5", "whide"]), "whide").unwrap();
        assert!(request.build_flag);
        assert_eq!(request.sim_args, args(&["whide"]));
    }

    #[test]
    fn missing_walltime_is_a_usage_error() {
        assert_eq!(parse(args(&[]), "whide"), Err(UsageError));
    }

    #[test]
    fn lone_marker_is_a_usage_error() {
        assert_eq!(parse(args(&["whide"]), "whide"), Err(UsageError));
    }
}
