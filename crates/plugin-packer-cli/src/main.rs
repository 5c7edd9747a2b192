//! plugin-packer CLI - Package an Unreal Engine plugin for distribution
//!
//! Run from (or point `--dir` at) a plugin directory containing a `.uplugin`
//! descriptor. One zip archive is written per target engine version.

use clap::Parser;

mod logging;
mod pack;

#[derive(Parser, Debug)]
#[command(name = "plugin-packer")]
#[command(author, version, about = "Pack the plugin for distribution.", long_about = None)]
struct Cli {
    /// Pack Engine-level version of the plugin
    #[arg(short, long)]
    engine: bool,

    /// A version of Unreal Engine to package for (default: PackerConfig.json or the descriptor)
    #[arg(long = "unreal-engine", visible_alias = "ue", value_name = "VERSION")]
    unreal_engine: Option<String>,

    /// Plugin directory (default: current directory)
    #[arg(short = 'C', long)]
    dir: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    pack::run(cli.dir, cli.engine, cli.unreal_engine)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn Cli___no_arguments___defaults_to_game_package() {
        let cli = Cli::try_parse_from(["plugin-packer"]).unwrap();

        assert!(!cli.engine);
        assert!(cli.unreal_engine.is_none());
        assert!(cli.dir.is_none());
    }

    #[test]
    fn Cli___engine_flag___short_and_long() {
        assert!(Cli::try_parse_from(["plugin-packer", "-e"]).unwrap().engine);
        assert!(Cli::try_parse_from(["plugin-packer", "--engine"]).unwrap().engine);
    }

    #[test]
    fn Cli___unreal_engine___accepts_alias() {
        let long = Cli::try_parse_from(["plugin-packer", "--unreal-engine", "5.1"]).unwrap();
        let alias = Cli::try_parse_from(["plugin-packer", "--ue", "5.2"]).unwrap();

        assert_eq!(long.unreal_engine.as_deref(), Some("5.1"));
        assert_eq!(alias.unreal_engine.as_deref(), Some("5.2"));
    }

    #[test]
    fn Cli___dir___short_option() {
        let cli = Cli::try_parse_from(["plugin-packer", "-C", "Plugins/Sample"]).unwrap();

        assert_eq!(cli.dir.as_deref(), Some("Plugins/Sample"));
    }

    #[test]
    fn Cli___unknown_flag___is_rejected() {
        assert!(Cli::try_parse_from(["plugin-packer", "--bogus"]).is_err());
    }
}
