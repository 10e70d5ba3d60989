//! # Command-line Arguments
//!
//! Argument parsing for the `hdrgen` binary. Every positional can be
//! omitted; whatever is missing gets asked for interactively.

use clap::Parser;
use hdrgen_core::TemplateKind;

/// Generate boilerplate C/C++ header files with include guards
#[derive(Debug, Parser)]
#[command(name = "hdrgen", version, about)]
pub struct Cli {
    /// Header file name to create (prompted for when omitted)
    pub name: Option<String>,

    /// Directory to create the file in instead of the current directory
    pub directory: Option<std::path::PathBuf>,

    /// C++ namespace to open inside the include guard
    pub namespace: Option<String>,

    /// Template flavor to render [possible values: namespace, extern-c]
    #[arg(short, long, default_value_t = TemplateKind::default())]
    pub template: TemplateKind,

    /// Overwrite an existing non-empty file without asking
    #[arg(short, long)]
    pub force: bool,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_no_arguments() {
        let cli = Cli::try_parse_from(["hdrgen"]).unwrap();
        assert_eq!(cli.name, None);
        assert_eq!(cli.directory, None);
        assert_eq!(cli.namespace, None);
        assert_eq!(cli.template, TemplateKind::Namespace);
        assert!(!cli.force);
    }

    #[test]
    fn test_parse_all_positionals() {
        let cli = Cli::try_parse_from(["hdrgen", "api.h", "include", "net"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("api.h"));
        assert_eq!(
            cli.directory.as_deref(),
            Some(std::path::Path::new("include"))
        );
        assert_eq!(cli.namespace.as_deref(), Some("net"));
    }

    #[test]
    fn test_parse_template_flag() {
        let cli = Cli::try_parse_from(["hdrgen", "--template", "extern-c", "api.h"]).unwrap();
        assert_eq!(cli.template, TemplateKind::ExternC);

        assert!(Cli::try_parse_from(["hdrgen", "--template", "bogus"]).is_err());
    }

    #[test]
    fn test_parse_force_flag() {
        let cli = Cli::try_parse_from(["hdrgen", "-f", "api.h"]).unwrap();
        assert!(cli.force);
    }
}
