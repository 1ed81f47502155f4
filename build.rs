use std::env;
use std::fs;
use std::path::Path;

/// Variables que el cliente lee con `option_env!` al compilar
const CONFIG_VARS: &[&str] = &["DOCUEXPRESS_API_URL", "ENABLE_LOGGING", "ENVIRONMENT"];

/// `KEY=VALUE` de una línea de .env, sin comillas alrededor del valor
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"')))
}

fn main() {
    for var in CONFIG_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }
    println!("cargo:rerun-if-changed=build.rs");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=DocuExpress: sin .env, DOCUEXPRESS_API_URL por defecto = /api");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=DocuExpress: no se pudo leer .env ({})", e);
            return;
        }
    };

    // Solo se exportan las variables del cliente; el entorno real manda
    for (key, value) in contents.lines().filter_map(parse_line) {
        if CONFIG_VARS.contains(&key) && env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
