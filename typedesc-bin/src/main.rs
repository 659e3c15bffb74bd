use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use itertools::Itertools as _;
use tracing_subscriber::EnvFilter;
use typedesc::{ArrayClassRegistry, ClassHierarchy, RegistryConfig, TypeName};

#[derive(Parser, Debug)]
#[command(name = "typedesc")]
#[command(about = "Resolve array class descriptors and answer reflection and cast queries", long_about = None)]
struct Args {
    /// Declare a reference class and its direct supertypes, as `Sub:Super1,Super2`
    #[arg(long = "class", value_name = "DECL")]
    classes: Vec<String>,

    /// Do not create the eight primitive array descriptors up front
    #[arg(long)]
    no_preload: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print name, binary name, dimensions, component and default value of each type
    Describe {
        /// Type literals such as `int[][]` or `java.lang.String[]`
        #[arg(required = true)]
        literals: Vec<String>,
    },
    /// Check whether a value of type FROM may be used where TO is expected
    Assignable { from: String, to: String },
}

fn parse_hierarchy(declarations: &[String]) -> Result<ClassHierarchy> {
    let mut hierarchy = ClassHierarchy::new();

    for declaration in declarations {
        let Some((class, supertypes)) = declaration.split_once(':') else {
            bail!("class declaration `{declaration}` is not of the form `Sub:Super1,Super2`");
        };

        hierarchy.declare(
            TypeName::parse(class.trim()),
            supertypes
                .split(',')
                .map(str::trim)
                .filter(|x| !x.is_empty())
                .map(TypeName::parse),
        );
    }

    Ok(hierarchy)
}

fn describe(registry: &ArrayClassRegistry, literals: &[String]) -> Result<()> {
    for literal in literals {
        let id = registry
            .for_name(literal)
            .with_context(|| format!("while describing `{literal}`"))?;

        let component = registry
            .component_type(id)
            .map_or_else(|| "-".to_string(), |x| registry.name(x).to_string());

        println!("{}", registry.name(id));
        println!("  binary name: {}", registry.binary_name(id));
        println!("  array:       {}", registry.is_array(id));
        println!("  dimensions:  {}", registry.dimensions(id));
        println!("  component:   {component}");
        println!("  default:     {}", registry.default_value(id));
    }

    Ok(())
}

const DEFAULT_LOG_DIRECTIVE: &str = "warn";

/// `RUST_LOG` directives when present and valid, `warn` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

fn main() -> Result<ExitCode> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let hierarchy = parse_hierarchy(&args.classes)?;
    let config = RegistryConfig::new().with_preload_primitive_arrays(!args.no_preload);
    let registry = ArrayClassRegistry::with_config(&config);

    tracing::info!(
        classes = %args.classes.iter().join(" "),
        preload = config.preload_primitive_arrays(),
        "registry configured"
    );

    match args.command {
        Commands::Describe { literals } => {
            describe(&registry, &literals)?;

            Ok(ExitCode::SUCCESS)
        }
        Commands::Assignable { from, to } => {
            let from_id = registry.for_name(&from)?;
            let to_id = registry.for_name(&to)?;

            if registry.is_assignable(from_id, to_id, &hierarchy) {
                println!("true");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("false");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
