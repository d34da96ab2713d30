//! CLI argument definitions for roster.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use roster_listing::{ListMembersRequest, OrderByInput};
use roster_seeker::FilterSpec;

/// Organization member listings.
///
/// ## Examples
///
/// All members of an organization:
///   roster list --data members.json --org org-1
///
/// Second page of ten, filtered and sorted:
///   roster list --data members.json --org org-1 \
///       --filter '{"firstName_contains": "jo"}' \
///       --order-by lastName_ASC --first 10 --skip 2
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the members of an organization as JSON.
    List(ListArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// JSON file holding an array of member records
    #[arg(long, env = "ROSTER_DATA")]
    pub data: PathBuf,

    /// Organization to list
    #[arg(long)]
    pub org: String,

    /// Filter as a JSON object (e.g. '{"email_contains": "@example.com"}')
    #[arg(long, value_parser = parse_filter)]
    pub filter: Option<FilterSpec>,

    /// Sort key (e.g. firstName_ASC, createdAt_DESC)
    #[arg(long)]
    pub order_by: Option<OrderByInput>,

    /// Page size
    #[arg(long, allow_negative_numbers = true)]
    pub first: Option<i64>,

    /// Page number, 1-based
    #[arg(long, allow_negative_numbers = true)]
    pub skip: Option<i64>,

    /// Prefix for member image paths
    #[arg(long, env = "ROSTER_API_ROOT", default_value = "")]
    pub api_root: String,

    /// YAML listing configuration
    #[arg(long, env = "ROSTER_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ListArgs {
    /// Builds the listing request these arguments describe.
    pub fn request(&self) -> ListMembersRequest {
        ListMembersRequest {
            org_id: self.org.clone(),
            filter: self.filter.clone(),
            order_by: self.order_by,
            first: self.first,
            skip: self.skip,
            api_root_url: self.api_root.clone(),
        }
    }
}

fn parse_filter(s: &str) -> Result<FilterSpec, serde_json::Error> {
    serde_json::from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("roster").chain(args.iter().copied()))
    }

    #[test]
    fn list_arguments() {
        let cli = parse(&[
            "list",
            "--data",
            "members.json",
            "--org",
            "org-1",
            "--filter",
            r#"{"firstName_contains": "jo"}"#,
            "--order-by",
            "lastName_DESC",
            "--first",
            "10",
            "--skip",
            "2",
            "--api-root",
            "https://api.example.com",
        ])
        .unwrap();

        let Command::List(args) = cli.command;
        let request = args.request();
        assert_eq!(request.org_id, "org-1");
        assert_eq!(
            request.filter.and_then(|f| f.first_name_contains),
            Some("jo".to_string())
        );
        assert_eq!(request.order_by, Some(OrderByInput::LastNameDesc));
        assert_eq!((request.first, request.skip), (Some(10), Some(2)));
        assert_eq!(request.api_root_url, "https://api.example.com");
    }

    #[test]
    fn negative_numbers_reach_validation() {
        let cli = parse(&["list", "--data", "m.json", "--org", "o", "--first", "5", "--skip", "-1"])
            .unwrap();
        let Command::List(args) = cli.command;
        assert_eq!(args.skip, Some(-1));
    }

    #[test]
    fn bad_filter_json_is_a_usage_error() {
        let err = parse(&["list", "--data", "m.json", "--org", "o", "--filter", "{not json"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn unknown_order_key_is_a_usage_error() {
        assert!(parse(&["list", "--data", "m.json", "--org", "o", "--order-by", "name_ASC"]).is_err());
    }

    #[test]
    fn verbosity_counts() {
        let cli = parse(&["-vv", "list", "--data", "m.json", "--org", "o"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
