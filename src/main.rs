use anyhow::Context;
use clap::Parser;
use fork_classpath::utils::{logger, validation::Validate};
use fork_classpath::{
    ClasspathConfiguration, ClasspathError, CliConfig, ConfigProvider, PropertiesFile, TomlConfig,
};

fn main() {
    let config = CliConfig::parse();
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ {:#}", e);
        match e.downcast_ref::<ClasspathError>() {
            Some(err) => {
                eprintln!("❌ {}", err.user_friendly_message());
                eprintln!("💡 {}", err.recovery_suggestion());
            }
            None => eprintln!("❌ {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    if let Some(path) = &config.read {
        return print_fork_properties(path, config.json);
    }

    let toml_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            Some(
                TomlConfig::from_file(path)
                    .with_context(|| format!("failed to load config file '{}'", path))?,
            )
        }
        None => None,
    };
    let provider: &dyn ConfigProvider = match &toml_config {
        Some(toml) => {
            toml.validate()?;
            toml
        }
        None => {
            config.validate()?;
            config
        }
    };

    let classpath_config = ClasspathConfiguration::from_provider(provider)?;
    tracing::debug!("Classpath configuration: {:?}", classpath_config);

    let mut file = PropertiesFile::new();
    classpath_config.write_to_fork_properties(&mut file);
    file.save(provider.fork_properties_path())?;

    tracing::info!(
        "✅ Wrote {} test and {} provider classpath elements to {}",
        classpath_config.test_classpath.len(),
        classpath_config.provider_classpath.len(),
        provider.fork_properties_path()
    );
    Ok(())
}

fn print_fork_properties(path: &str, json: bool) -> anyhow::Result<()> {
    let file = PropertiesFile::load(path)?;
    let classpath = ClasspathConfiguration::read_from_fork_properties(&file).effective_classpath();

    if json {
        let urls: Vec<String> = classpath
            .get_as_url_list()?
            .into_iter()
            .map(String::from)
            .collect();
        println!("{}", serde_json::to_string_pretty(&urls)?);
    } else {
        println!("{}", classpath);
    }
    Ok(())
}
