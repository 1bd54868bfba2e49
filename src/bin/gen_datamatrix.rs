use std::env;
use std::fs;
use std::process::ExitCode;

use bargen::config::GeneratorConfig;
use bargen::{Generator, GeneratorBuilder, Template};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut gtin: Option<String> = None;
    let mut template = Template::Type1;
    let mut count: usize = 1;
    let mut seed: Option<u64> = None;
    let mut config_path: Option<String> = None;
    let mut raw = false;

    // Примитивный парсер аргументов:
    // --gtin 4810099003310  --template type2  --count 5  --seed 42  --config cfg.json  --raw
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--gtin" => gtin = args.next(),
            "--template" => match args.next().as_deref().map(str::parse::<Template>) {
                Some(Ok(t)) => template = t,
                Some(Err(e)) => return fail(&e.to_string()),
                None => return fail("--template требует значение"),
            },
            "--count" => if let Some(v) = args.next() { count = v.parse().unwrap_or(1); },
            "--seed" => seed = args.next().and_then(|v| v.parse().ok()),
            "--config" => config_path = args.next(),
            "--raw" => raw = true,
            "--help" | "-h" => {
                print_help();
                return ExitCode::SUCCESS;
            }
            other => {
                eprintln!("Неизвестный аргумент: {other}");
                print_help();
                return ExitCode::from(2);
            }
        }
    }

    let mut generator = match build_generator(config_path.as_deref(), seed) {
        Ok(g) => g,
        Err(msg) => return fail(&msg),
    };

    for _ in 0..count.max(1) {
        let dm = generator.generate_dm(gtin.as_deref(), template);
        let shown = if raw { dm.code.clone() } else { dm.printable() };
        println!("{} [{}] {}", dm.gtin, dm.template_name(), shown);
    }
    ExitCode::SUCCESS
}

fn build_generator(config_path: Option<&str>, seed: Option<u64>) -> Result<Generator, String> {
    let mut config = match config_path {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|e| format!("Ошибка чтения {path}: {e}"))?;
            GeneratorConfig::from_json(&json).map_err(|e| e.to_string())?
        }
        None => GeneratorConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    GeneratorBuilder::new().config(config).build().map_err(|e| e.to_string())
}

fn fail(msg: &str) -> ExitCode {
    eprintln!("{msg}");
    ExitCode::FAILURE
}

fn print_help() {
    eprintln!(
r#"Использование:
  cargo run --bin gen_datamatrix -- [--gtin <digits>] [--template type1|type2] [--count <n>] [--seed <n>] [--config <file.json>] [--raw]

Без --gtin берутся GTIN из демо-списка по кругу. GS (0x1D) печатается как <GS>, с --raw как есть.

Примеры:
  cargo run --bin gen_datamatrix --
  cargo run --bin gen_datamatrix -- --gtin 4810099003310 --template type2
  cargo run --bin gen_datamatrix -- --count 10 --seed 42
"#
    );
}
