#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process};

#[cfg(target_os = "linux")]
use iced::window::settings::PlatformSpecific;
use iced::{Settings, Size};
use tracing::{error, info};

use scaleheight::{config::Config, dir::SignupDirectory};
use scaleheight_gui::{
    app::App,
    logger::{effective_level, parse_log_level, setup_logger},
    VERSION,
};
use scaleheight_ui::{component::text, theme};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(SignupDirectory),
    ConfigPath(PathBuf),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: scaleheight-signup [OPTIONS]

Options:
    --datadir <PATH>    Path of the scaleheight datadir
    --conf <PATH>       Path of the configuration file
    -v, --version       Display scaleheight-signup version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--datadir" => match args.next() {
                Some(a) => res.push(Arg::DatadirPath(SignupDirectory::new(PathBuf::from(a)))),
                None => return Err("missing arg to --datadir".into()),
            },
            "--conf" => match args.next() {
                Some(a) => res.push(Arg::ConfigPath(PathBuf::from(a))),
                None => return Err("missing arg to --conf".into()),
            },
            _ => return Err(format!("Unknown argument '{}'", arg).into()),
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let (datadir, config_path) = match args.as_slice() {
        [] => (SignupDirectory::new_default()?, None),
        [Arg::DatadirPath(datadir)] => (datadir.clone(), None),
        [Arg::ConfigPath(path)] => (SignupDirectory::new_default()?, Some(path.clone())),
        [Arg::DatadirPath(datadir), Arg::ConfigPath(path)]
        | [Arg::ConfigPath(path), Arg::DatadirPath(datadir)] => {
            (datadir.clone(), Some(path.clone()))
        }
        _ => {
            return Err("Unknown args combination".into());
        }
    };

    if !datadir.exists() {
        datadir.init()?;
    }

    // An explicit configuration file must exist, the default one may not.
    let config = match config_path {
        Some(path) => Config::from_file(&path),
        None => Config::from_file_or_default(&datadir.config_file()),
    }
    .map_err(|e| format!("Error loading configuration: {}", e))?;

    let log_level = effective_level(config.log_level, parse_log_level()?);
    if let Err(e) = setup_logger(log_level, &datadir) {
        eprintln!("Error while setting up the logger: {}", e);
    }
    info!("Using datadir {}", datadir.path().display());

    setup_panic_hook();

    let settings = Settings {
        id: Some("ScaleHeight".to_string()),
        antialiasing: false,

        default_text_size: text::P1_SIZE.into(),
        default_font: scaleheight_ui::font::REGULAR,
        ..Default::default()
    };

    #[allow(unused_mut)]
    let mut window_settings = iced::window::Settings {
        size: Size {
            width: 800.0,
            height: 900.0,
        },
        position: iced::window::Position::Centered,
        min_size: Some(Size {
            width: 500.0,
            height: 600.0,
        }),
        ..Default::default()
    };

    #[cfg(target_os = "linux")]
    {
        window_settings.platform_specific = PlatformSpecific {
            application_id: "ScaleHeight".to_string(),
            ..Default::default()
        };
    }

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(|_| theme::Theme::default())
        .settings(settings)
        .window(window_settings)
        .run_with(move || App::new(config, &datadir))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        error!("Panic occurred");
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        std::iter::once("scaleheight-signup")
            .chain(s.split(' '))
            .map(|a| a.to_string())
            .collect()
    }

    #[test]
    fn test_parse_args() {
        assert!(parse_args(args("--meth")).is_err());
        assert!(parse_args(args("--datadir")).is_err());
        assert!(parse_args(args("--conf")).is_err());
        assert_eq!(
            parse_args(vec!["scaleheight-signup".to_string()]).ok(),
            Some(vec![])
        );
        assert_eq!(
            Some(vec![Arg::DatadirPath(SignupDirectory::new(PathBuf::from(
                "hello"
            )))]),
            parse_args(args("--datadir hello")).ok()
        );
        assert_eq!(
            Some(vec![
                Arg::ConfigPath(PathBuf::from("config.toml")),
                Arg::DatadirPath(SignupDirectory::new(PathBuf::from("hello"))),
            ]),
            parse_args(args("--conf config.toml --datadir hello")).ok()
        );
    }
}
