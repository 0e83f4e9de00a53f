//! Integration tests for CLI functionality

#[cfg(feature = "cli")]
mod cli_integration_tests {
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    use autocorrect::cli::commands::{
        load_dictionary, load_terms, render, run_check, update_settings,
    };
    use autocorrect::cli::config::validate_config_path;
    use autocorrect::cli::{CliConfig, InputError, ProtocolReader};
    use autocorrect::prelude::*;

    fn check(input: &str) -> String {
        let mut out = Vec::new();
        run_check(Cursor::new(input), &mut out, &CliConfig::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_check_protocol_session() {
        let input = "3\ncat\ncats\ncot\ncat\ncaat\nct\nact\ndog\n";
        let expected = "cat - ok\ncaat -> cat\nct -> cat, cot\nact -> cat\ndog -?\n";
        assert_eq!(check(input), expected);
    }

    #[test]
    fn test_check_lowercases_dictionary_words() {
        let output = check("2\nHello\nWORLD\nhello\nWorld\nwrold\n");
        assert_eq!(output, "hello - ok\nWorld - ok\nwrold -> world\n");
    }

    #[test]
    fn test_check_without_queries() {
        assert_eq!(check("2\ncat\ncot\n"), "");
    }

    #[test]
    fn test_check_truncated_dictionary() {
        let mut out = Vec::new();
        let err = run_check(Cursor::new("5\ncat\n"), &mut out, &CliConfig::default()).unwrap_err();
        match err.downcast_ref::<InputError>() {
            Some(InputError::TruncatedDictionary { expected, found }) => {
                assert_eq!(*expected, 5);
                assert_eq!(*found, 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn test_check_missing_size() {
        let mut out = Vec::new();
        let err = run_check(Cursor::new(""), &mut out, &CliConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::MissingSize)
        ));
    }

    #[test]
    fn test_protocol_reader_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.path().join("session.txt");
        fs::write(&input_path, "1\nword\nwrod\n").unwrap();

        let file = fs::File::open(&input_path).unwrap();
        let mut reader = ProtocolReader::new(std::io::BufReader::new(file), true);
        assert_eq!(reader.read_dictionary().unwrap(), vec!["word"]);
        assert_eq!(reader.next_query().unwrap().as_deref(), Some("wrod"));
        assert_eq!(reader.next_query().unwrap(), None);
    }

    #[test]
    fn test_load_terms_skips_comments_and_blanks() {
        let temp_dir = TempDir::new().unwrap();
        let dict_path = temp_dir.path().join("words.txt");
        fs::write(&dict_path, "# fruit\napple\n\n  banana  \n#cherry\n").unwrap();

        let terms = load_terms(&dict_path).unwrap();
        assert_eq!(terms, vec!["apple", "banana"]);
    }

    #[test]
    fn test_load_terms_rejects_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let dict_path = temp_dir.path().join("empty.txt");
        fs::write(&dict_path, "# nothing here\n\n").unwrap();

        let err = load_terms(&dict_path).unwrap_err();
        assert!(err.to_string().contains("Dictionary file is empty"));
    }

    #[test]
    fn test_load_terms_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_terms(&temp_dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to open dictionary file"));
    }

    #[test]
    fn test_loaded_terms_drive_transducer() {
        let temp_dir = TempDir::new().unwrap();
        let dict_path = temp_dir.path().join("words.txt");
        fs::write(&dict_path, "apple\napply\nbanana\n").unwrap();

        let terms = load_terms(&dict_path).unwrap();
        let transducer = Transducer::new(RadixTrie::from_terms(&terms));

        assert_eq!(
            render("appl", &transducer.correct("appl")),
            "appl -> apple, apply"
        );
        assert_eq!(render("banana", &transducer.correct("banana")), "banana - ok");
        assert_eq!(render("cherry", &transducer.correct("cherry")), "cherry -?");
    }

    #[test]
    fn test_config_default() {
        let config = CliConfig::default();
        assert_eq!(config.case_fold, Some(true));
        assert_eq!(config.skip_blank_lines, Some(true));
    }

    #[test]
    fn test_config_file_overridden_by_cli() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, r#"{ "case_fold": true, "skip_blank_lines": false }"#).unwrap();

        let config = CliConfig::load_from(Some(&config_path)).unwrap();
        assert!(!config.skip_blank_lines());

        let merged = config.merge_with_cli(Some(false), None);
        assert!(!merged.case_fold());
        assert!(!merged.skip_blank_lines());
    }

    #[test]
    fn test_config_parse_error_has_context() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ not json").unwrap();

        let err = CliConfig::load_from(Some(&config_path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_extension_validation() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_config_path(&temp_dir.path().join("config.yaml")).is_err());
        assert!(validate_config_path(&temp_dir.path().join("config.json")).is_ok());
    }

    #[test]
    fn test_load_dictionary_folds_case_like_queries() {
        let temp_dir = TempDir::new().unwrap();
        let dict_path = temp_dir.path().join("mixed.txt");
        fs::write(&dict_path, "Cat\ncat\nCOT\n").unwrap();

        let folded = load_dictionary(&dict_path, &CliConfig::default()).unwrap();
        assert_eq!(folded.len(), 2);
        assert_eq!(folded.terms().collect::<Vec<_>>(), vec!["cat", "cot"]);

        let exact = CliConfig::default().merge_with_cli(Some(false), None);
        let as_written = load_dictionary(&dict_path, &exact).unwrap();
        assert_eq!(as_written.len(), 3);
        assert!(as_written.contains("COT"));
    }

    #[test]
    fn test_update_settings_writes_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings").join("config.json");

        let config = update_settings(&config_path, Some(false), None, false).unwrap();
        assert!(!config.case_fold());
        assert!(config.skip_blank_lines());
        assert_eq!(CliConfig::load_from(Some(&config_path)).unwrap(), config);

        let config = update_settings(&config_path, None, Some(false), false).unwrap();
        assert!(!config.case_fold());
        assert!(!config.skip_blank_lines());

        let config = update_settings(&config_path, None, None, true).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(
            CliConfig::load_from(Some(&config_path)).unwrap(),
            CliConfig::default()
        );
    }

    #[test]
    fn test_update_settings_without_changes_leaves_file_alone() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let config = update_settings(&config_path, None, None, false).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(!config_path.exists());
    }
}
