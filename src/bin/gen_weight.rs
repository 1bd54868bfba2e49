use std::env;
use std::process::ExitCode;

use bargen::batch::parse_plu_list;
use bargen::one_d::family::FieldValues;
use bargen::{BarcodeFamily, GeneratorBuilder, WeightPrefix};
use tracing_subscriber::EnvFilter;

enum Mode {
    Single,
    Form(BarcodeFamily),
    Batch,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut mode = Mode::Single;
    let mut prefix = WeightPrefix::Cas77;
    let mut plu = String::from("12345");
    let mut weight: u32 = 500;
    let mut discount: Option<u32> = None;
    let mut fields = FieldValues::new();
    let mut bad_check = false;
    let mut variations: usize = 3;
    let mut seed: Option<u64> = None;

    // --prefix 77|49|22  --plu 123  --weight 1500  --discount 10
    // --family code128_19_price --field productCode=42 --field price=9990 [--bad-check]
    // --batch --plu "123,456" --variations 5
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--prefix" => match args.next().map(|v| v.parse::<WeightPrefix>()) {
                Some(Ok(p)) => prefix = p,
                Some(Err(e)) => return fail(&e.to_string()),
                None => return fail("--prefix требует значение"),
            },
            "--plu" => if let Some(v) = args.next() { plu = v; },
            "--weight" => if let Some(v) = args.next() { weight = v.parse().unwrap_or(500); },
            "--discount" => discount = args.next().and_then(|v| v.parse().ok()),
            "--family" => match args.next().map(|v| v.parse::<BarcodeFamily>()) {
                Some(Ok(f)) => mode = Mode::Form(f),
                Some(Err(e)) => return fail(&e.to_string()),
                None => return fail("--family требует значение"),
            },
            "--field" => {
                if let Some((k, v)) = args.next().as_deref().and_then(|kv| kv.split_once('=')) {
                    fields.insert(k.to_owned(), v.to_owned());
                }
            }
            "--bad-check" => bad_check = true,
            "--batch" => mode = Mode::Batch,
            "--variations" => if let Some(v) = args.next() { variations = v.parse().unwrap_or(3); },
            "--seed" => seed = args.next().and_then(|v| v.parse().ok()),
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

    let mut builder = GeneratorBuilder::new();
    if let Some(s) = seed {
        builder = builder.seed(s);
    }
    let mut generator = match builder.build() {
        Ok(g) => g,
        Err(e) => return fail(&e.to_string()),
    };

    match mode {
        Mode::Single => {
            let bc = generator.generate_weight_barcode(prefix, &plu, weight, discount);
            println!("{}", bc.code);
        }
        Mode::Form(family) => match generator.generate_barcode(family, &fields, bad_check) {
            Ok(code) => println!("{code}"),
            Err(e) => return fail(&e.to_string()),
        },
        Mode::Batch => {
            let mut request = generator.weight_batch_request(parse_plu_list(&plu.replace(',', "\n")));
            request.variations = variations;
            match generator.generate_weight_batch(&request) {
                Ok(items) => {
                    println!("# {}", request.default_label());
                    for item in items {
                        println!("{:<10} {:>5} г  {}", item.id, item.barcode.weight, item.barcode.code);
                    }
                }
                Err(e) => return fail(&e.to_string()),
            }
        }
    }
    ExitCode::SUCCESS
}

fn fail(msg: &str) -> ExitCode {
    eprintln!("{msg}");
    ExitCode::FAILURE
}

fn print_help() {
    eprintln!(
r#"Использование:
  cargo run --bin gen_weight -- [--prefix 77|49|22] [--plu <digits>] [--weight <g>] [--discount <%>]
  cargo run --bin gen_weight -- --family <id> --field <name>=<value>... [--bad-check]
  cargo run --bin gen_weight -- --batch --plu <a,b,...> [--variations <n>] [--seed <n>]

Семейства: code128_19_piece, code128_19_weight, code128_19_price, code128_16_cas, ean13_weight.

Примеры:
  cargo run --bin gen_weight -- --prefix 22 --plu 12345 --weight 6789
  cargo run --bin gen_weight -- --family code128_16_cas --field productCode=1 --field weight=2500
  cargo run --bin gen_weight -- --batch --plu 123,456 --variations 2 --seed 7
"#
    );
}
