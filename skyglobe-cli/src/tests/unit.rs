//! Focused unit tests covering locate configuration, dataset paths and
//! argument parsing.

use super::helpers::{DataDir, cli_layer, stdout_json, write_utf8};
use super::*;
use crate::dataset::{DEFAULT_BOUNDARIES_FILE, DEFAULT_COUNTRIES_FILE, DatasetPaths};
use crate::locate::{LocateConfig, execute_locate};
use camino::Utf8PathBuf;
use rstest::rstest;

fn locate_config(dir: &DataDir, latitude: f64, longitude: f64, linear: bool) -> LocateConfig {
    LocateConfig {
        latitude,
        longitude,
        paths: DatasetPaths::resolve(Some(dir.root().to_path_buf()), None, None),
        linear,
    }
}

#[rstest]
#[case::latitude(None, Some(28.0), ARG_LATITUDE, ENV_LOCATE_LATITUDE)]
#[case::longitude(Some(-26.0), None, ARG_LONGITUDE, ENV_LOCATE_LONGITUDE)]
fn converting_locate_without_coordinate_errors(
    #[case] latitude: Option<f64>,
    #[case] longitude: Option<f64>,
    #[case] expected_field: &'static str,
    #[case] expected_env: &'static str,
) {
    let args = LocateArgs {
        latitude,
        longitude,
        ..LocateArgs::default()
    };

    let err = LocateConfig::try_from(args).expect_err("missing coordinate should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, expected_field);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn dataset_paths_default_to_working_directory() {
    let paths = DatasetPaths::resolve(None, None, None);
    assert_eq!(paths.countries, Utf8PathBuf::from(".").join(DEFAULT_COUNTRIES_FILE));
    assert_eq!(
        paths.boundaries,
        Utf8PathBuf::from(".").join(DEFAULT_BOUNDARIES_FILE)
    );
}

#[rstest]
fn explicit_paths_override_data_dir() {
    let explicit = Utf8PathBuf::from("/srv/shapes/world.geojson");
    let paths = DatasetPaths::resolve(
        Some(Utf8PathBuf::from("/srv/data")),
        None,
        Some(explicit.clone()),
    );
    assert_eq!(paths.countries, Utf8PathBuf::from("/srv/data/countries.json"));
    assert_eq!(paths.boundaries, explicit);
}

#[rstest]
#[case::countries(ARG_COUNTRIES, true)]
#[case::boundaries(ARG_BOUNDARIES, false)]
fn validate_sources_reports_missing_files(
    #[case] expected_field: &'static str,
    #[case] countries_missing: bool,
) {
    let dir = DataDir::empty();
    if countries_missing {
        write_utf8(&dir.boundaries(), b"{}");
    } else {
        write_utf8(&dir.countries(), b"[]");
    }
    let paths = DatasetPaths::resolve(Some(dir.root().to_path_buf()), None, None);

    let err = paths.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let dir = DataDir::empty();
    std::fs::create_dir(dir.countries().as_std_path()).expect("countries directory");
    write_utf8(&dir.boundaries(), b"{}");
    let paths = DatasetPaths::resolve(Some(dir.root().to_path_buf()), None, None);

    let err = paths
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_COUNTRIES);
            assert_eq!(path, dir.countries());
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn malformed_boundaries_surface_load_error() {
    let dir = DataDir::populated();
    write_utf8(&dir.boundaries(), b"{ not geojson");
    let config = locate_config(&dir, -26.0, 28.0, false);

    let mut stdout = Vec::new();
    let err = execute_locate(&config, &mut stdout).expect_err("parse should fail");
    assert!(matches!(err, CliError::LoadDataset(_)), "found {err:?}");
    assert!(stdout.is_empty());
}

#[rstest]
#[case::inside_south_africa(-26.2, 28.0, Some("ZA"))]
#[case::inside_lesotho_hole(-29.3, 27.5, Some("LS"))]
#[case::open_ocean(-30.0, 0.0, None)]
fn locate_prints_country_json(
    #[case] latitude: f64,
    #[case] longitude: f64,
    #[case] expected: Option<&str>,
    #[values(false, true)] linear: bool,
) {
    let dir = DataDir::populated();
    let config = locate_config(&dir, latitude, longitude, linear);

    let mut stdout = Vec::new();
    execute_locate(&config, &mut stdout).expect("locate should succeed");

    let output = stdout_json(&stdout);
    assert_eq!(output["country"]["alpha2"].as_str(), expected);
    assert_eq!(output["latitude"].as_f64(), Some(latitude));
}

#[rstest]
fn locate_output_carries_country_details() {
    let dir = DataDir::populated();
    let config = locate_config(&dir, -29.3, 27.5, false);

    let mut stdout = Vec::new();
    execute_locate(&config, &mut stdout).expect("locate should succeed");

    let output = stdout_json(&stdout);
    assert_eq!(output["country"]["alpha3"], "LSO");
    assert_eq!(output["country"]["name"], "Lesotho");
    assert_eq!(output["country"]["centroid"]["lat"].as_f64(), Some(-29.5));
    assert_eq!(output["country"]["centroid"]["lng"].as_f64(), Some(28.5));
}

#[rstest]
fn parser_accepts_negative_positional_coordinates() {
    let cli = Cli::try_parse_from(["skyglobe", "locate", "-33.9", "-18.4", "--linear"])
        .expect("negative coordinates should parse");
    match cli.command {
        Command::Locate(args) => {
            assert_eq!(args.latitude, Some(-33.9));
            assert_eq!(args.longitude, Some(-18.4));
            assert_eq!(args.linear, Some(true));
        }
        other => panic!("expected locate command, found {other:?}"),
    }
}

#[rstest]
fn parser_rejects_non_numeric_latitude() {
    let err = Cli::try_parse_from(["skyglobe", "locate", "north", "18.4"])
        .expect_err("non-numeric latitude should fail");
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[rstest]
fn parser_requires_subcommand() {
    let err = Cli::try_parse_from(["skyglobe"]).expect_err("subcommand is required");
    assert!(matches!(
        err.kind(),
        clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | clap::error::ErrorKind::MissingSubcommand
    ));
}

#[rstest]
fn default_log_filter_is_warn() {
    assert_eq!(DEFAULT_LOG_FILTER, "warn");
}

#[rstest]
fn coordinates_and_linear_scan_come_from_environment() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let args = Cli::try_parse_from(["skyglobe", "locate", "--data-dir", "/srv/data"])
        .map(|cli| match cli.command {
            Command::Locate(args) => args,
            other => panic!("expected locate command, found {other:?}"),
        })
        .expect("arguments parse");
    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "linear": false, "latitude": 10.0 }), None);
    composer.push_environment(json!({
        "latitude": -29.3,
        "longitude": 27.5,
        "linear": true,
    }));
    composer.push_cli(cli_layer(&args));

    let config = locate::config_from_layers_for_test(composer.layers())
        .expect("merged config should build");
    assert_eq!(config.latitude, -29.3);
    assert_eq!(config.longitude, 27.5);
    assert!(config.linear);
    assert_eq!(config.paths.countries, Utf8PathBuf::from("/srv/data/countries.json"));
}

#[rstest]
fn explicit_linear_flag_overrides_environment() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let args = Cli::try_parse_from(["skyglobe", "locate", "1.0", "2.0", "--linear=false"])
        .map(|cli| match cli.command {
            Command::Locate(args) => args,
            other => panic!("expected locate command, found {other:?}"),
        })
        .expect("arguments parse");
    let mut composer = MergeComposer::new();
    composer.push_environment(json!({ "linear": true }));
    composer.push_cli(cli_layer(&args));

    let config = locate::config_from_layers_for_test(composer.layers())
        .expect("merged config should build");
    assert!(!config.linear);
}
