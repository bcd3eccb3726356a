use herald_core::ReviewEnv;
use herald_pipeline::artifact::is_blank;

#[test]
fn blank_diff_means_clean_exit() {
    // The review subcommand exits 0 without any HTTP call for these.
    assert!(is_blank(""));
    assert!(is_blank("\n\n   \n"));
    assert!(!is_blank("+ line added\n"));
}

#[test]
fn missing_config_halts_before_any_work() {
    let err = ReviewEnv::from_lookup(|_| None).unwrap_err();
    assert!(err.to_string().contains("not set"));
}

#[test]
fn config_errors_name_the_variable() {
    let err = ReviewEnv::from_lookup(|key| match key {
        "OPENAI_API_KEY" => Some("sk-test".into()),
        "REPO" => Some("octocat/hello-world".into()),
        "PR_NUMBER" => Some("42".into()),
        _ => None,
    })
    .unwrap_err();
    assert!(err.to_string().contains("GITHUB_TOKEN"));
}
