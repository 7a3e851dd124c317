//! Reusable file contents for CLI tests.

/// Two SSO profiles, in the order the checks read them
pub const AWS_CONFIG: &str = "\
[default]
region = us-east-1

[profile dev]
sso_session = corp
sso_account_id = 111111111111
sso_role_name = Developer

[profile prod]
sso_session = corp
sso_account_id = 222222222222
sso_role_name = Developer
";

/// Artifact with distinct account-role pairs for `dev` and `prod`
pub const DISTINCT_IDENTITIES: &str = r#"{
  "dev": {"Account": "111111111111", "RoleName": "Developer"},
  "prod": {"Account": "222222222222", "RoleName": "Developer"}
}"#;

/// Artifact where both profiles resolve to the same pair
pub const DUPLICATE_IDENTITIES: &str = r#"[
  {"ProfileName": "dev", "AccountId": "111111111111", "Role": "Developer"},
  {"ProfileName": "prod", "AccountId": "111111111111", "Role": "Developer"}
]"#;

/// `aws-sso-util --version`
pub const SSO_UTIL_SCRIPT: &str = "echo 'aws-sso-util, version 4.33.0'";

/// `aws sts get-caller-identity --profile <name>`: the profile is `$4`
pub const AWS_CLI_SCRIPT: &str = r#"case "$4" in
  dev) echo '{"UserId": "AROA1:dev", "Account": "111111111111", "Arn": "arn:aws:sts::111111111111:assumed-role/Developer/dev"}' ;;
  prod) echo '{"UserId": "AROA2:prod", "Account": "222222222222", "Arn": "arn:aws:sts::222222222222:assumed-role/Developer/prod"}' ;;
  *) echo "The config profile ($4) could not be found" >&2; exit 255 ;;
esac"#;
