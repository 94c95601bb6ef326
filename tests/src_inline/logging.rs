use super::*;

#[test]
fn test_build_filter_accepts_level_names() {
    for level in ["error", "warn", "info", "debug", "trace"] {
        assert!(build_filter(level).is_ok(), "level={level}");
    }
}

#[test]
fn test_build_filter_accepts_module_directives() {
    assert!(build_filter("warn,kira_gradestats=debug").is_ok());
}
