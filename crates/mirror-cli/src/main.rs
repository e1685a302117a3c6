use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mirror_core::BusinessProfileType;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "mirror-cli")]
#[command(about = "brandmirror classification command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Detect a business profile from a UVP JSON file.
    Detect {
        /// Path to the UVP JSON file.
        #[arg(long)]
        uvp: PathBuf,
        /// Optional brand JSON file folded into the detection corpus.
        #[arg(long)]
        brand: Option<PathBuf>,
    },
    /// Score a piece of text against a profile's relevance config.
    Relevance {
        #[arg(long)]
        text: String,
        #[arg(long)]
        profile: BusinessProfileType,
    },
    /// Look up the quality adjustment for a mention source.
    SourceQuality {
        #[arg(long)]
        source: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        content: Option<String>,
        /// Use this profile's tier lists instead of the global table.
        #[arg(long)]
        profile: Option<BusinessProfileType>,
    },
    /// Classify a piece of text into an SMB segment.
    Smb {
        #[arg(long)]
        text: String,
        #[arg(long)]
        context: Option<String>,
        /// Author bio, classified independently for role agreement.
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        platform: Option<String>,
    },
    /// Extract SMB signals from collected Reddit posts and comments.
    Reddit {
        /// Path to a JSON array of posts.
        #[arg(long)]
        posts: PathBuf,
        /// Path to a JSON array of comments.
        #[arg(long)]
        comments: Option<PathBuf>,
        /// Drop signals that fail this profile's relevance check.
        #[arg(long)]
        profile: Option<BusinessProfileType>,
        /// Competitor names to attribute, comma separated.
        #[arg(long, value_delimiter = ',')]
        competitors: Vec<String>,
    },
    /// Validate draft content against a profile's JTBD templates.
    Jtbd {
        #[arg(long)]
        title: String,
        #[arg(long)]
        summary: Option<String>,
        #[arg(long)]
        profile: BusinessProfileType,
        /// Optional UVP JSON file used to derive an extra template.
        #[arg(long)]
        uvp: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Detect { uvp, brand } => commands::run_detect(&uvp, brand.as_deref()),
        Commands::Relevance { text, profile } => commands::run_relevance(&text, profile),
        Commands::SourceQuality {
            source,
            url,
            content,
            profile,
        } => commands::run_source_quality(
            source.as_deref(),
            url.as_deref(),
            content.as_deref(),
            profile,
        ),
        Commands::Smb {
            text,
            context,
            bio,
            platform,
        } => commands::run_smb(text, context, bio, platform),
        Commands::Reddit {
            posts,
            comments,
            profile,
            competitors,
        } => commands::run_reddit(&posts, comments.as_deref(), profile, &competitors),
        Commands::Jtbd {
            title,
            summary,
            profile,
            uvp,
        } => commands::run_jtbd(&title, summary.as_deref(), profile, uvp.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn profile_arg_parses_kebab_case() {
        let cli = Cli::parse_from([
            "mirror-cli",
            "relevance",
            "--text",
            "looking for a crm",
            "--profile",
            "national-saas-b2b",
        ]);
        match cli.command {
            Commands::Relevance { profile, .. } => {
                assert_eq!(profile, BusinessProfileType::NationalSaasB2b);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
