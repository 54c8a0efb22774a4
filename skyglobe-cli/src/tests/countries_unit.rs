//! Unit tests for the `countries` listing.

use super::helpers::{DataDir, cli_layer, stdout_json};
use super::*;
use crate::countries::{CountriesConfig, execute_countries};
use crate::dataset::DatasetPaths;
use rstest::rstest;

fn listed_codes(all: bool) -> Vec<String> {
    let dir = DataDir::populated();
    let config = CountriesConfig {
        paths: DatasetPaths::resolve(Some(dir.root().to_path_buf()), None, None),
        all,
    };

    let mut stdout = Vec::new();
    execute_countries(&config, &mut stdout).expect("countries should succeed");
    stdout_json(&stdout)
        .as_array()
        .expect("countries prints an array")
        .iter()
        .map(|entry| entry["alpha2"].as_str().expect("alpha2").to_owned())
        .collect()
}

#[rstest]
fn lists_only_mapped_countries_by_default() {
    assert_eq!(listed_codes(false), ["ZA", "LS"]);
}

#[rstest]
fn all_flag_includes_countries_without_boundaries() {
    assert_eq!(listed_codes(true), ["ZA", "LS", "NZ"]);
}

#[rstest]
fn all_flag_can_come_from_environment() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let dir = DataDir::populated();
    let args = Cli::try_parse_from(["skyglobe", "countries"])
        .map(|cli| match cli.command {
            Command::Countries(args) => args,
            other => panic!("expected countries command, found {other:?}"),
        })
        .expect("arguments parse");
    let mut composer = MergeComposer::new();
    composer.push_environment(json!({
        "all": true,
        "data_dir": dir.root().as_str(),
    }));
    composer.push_cli(cli_layer(&args));

    let config = countries::config_from_layers_for_test(composer.layers())
        .expect("merged config should build");
    assert!(config.all);

    let mut stdout = Vec::new();
    execute_countries(&config, &mut stdout).expect("countries should succeed");
    let listed = stdout_json(&stdout);
    assert_eq!(listed.as_array().map(Vec::len), Some(3));
}

#[rstest]
fn parser_accepts_bare_all_flag() {
    let cli = Cli::try_parse_from(["skyglobe", "countries", "--all"]).expect("flag should parse");
    match cli.command {
        Command::Countries(args) => assert_eq!(args.all, Some(true)),
        other => panic!("expected countries command, found {other:?}"),
    }
}
