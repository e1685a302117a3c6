//! Command handlers for the CLI.
//!
//! Each handler reads its inputs, runs the matching classifier, and prints
//! the result as pretty JSON so the output can be piped into other tools.

use std::fs;
use std::path::Path;

use anyhow::Context;
use mirror_classify::{
    actionability_score, check_relevance, profile_aware_quality_adjustment, quality_adjustment,
    validate_jtbd, ProfileDetector, SmbClassifier, SmbInput,
};
use mirror_core::{BrandData, BusinessProfileType, UvpData};
use mirror_reddit::{KeywordCompetitorIndex, RedditComment, RedditPost, RedditSmbAnalyzer};

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn run_detect(uvp_path: &Path, brand_path: Option<&Path>) -> anyhow::Result<()> {
    let uvp: UvpData = read_json(uvp_path)?;
    let brand: Option<BrandData> = brand_path.map(read_json).transpose()?;

    let detector = ProfileDetector::new();
    let analysis = detector.detect(&uvp, brand.as_ref());
    print_json(&analysis)
}

pub(crate) fn run_relevance(text: &str, profile: BusinessProfileType) -> anyhow::Result<()> {
    print_json(&check_relevance(text, profile))
}

pub(crate) fn run_source_quality(
    source: Option<&str>,
    url: Option<&str>,
    content: Option<&str>,
    profile: Option<BusinessProfileType>,
) -> anyhow::Result<()> {
    let adjustment = match profile {
        Some(profile) => profile_aware_quality_adjustment(source, profile, url, content),
        None => quality_adjustment(source, url, content),
    };
    print_json(&adjustment)
}

pub(crate) fn run_smb(
    text: String,
    context: Option<String>,
    bio: Option<String>,
    platform: Option<String>,
) -> anyhow::Result<()> {
    let classifier = SmbClassifier::new();
    let classification = classifier.classify(&SmbInput {
        text,
        context,
        author_info: bio,
        platform,
    });
    let actionability = actionability_score(&classification);
    print_json(&serde_json::json!({
        "classification": classification,
        "actionability": actionability,
    }))
}

pub(crate) fn run_reddit(
    posts_path: &Path,
    comments_path: Option<&Path>,
    profile: Option<BusinessProfileType>,
    competitors: &[String],
) -> anyhow::Result<()> {
    let posts: Vec<RedditPost> = read_json(posts_path)?;
    let comments: Vec<RedditComment> = comments_path.map(read_json).transpose()?.unwrap_or_default();

    let names: Vec<&str> = competitors.iter().map(String::as_str).collect();
    let analyzer = RedditSmbAnalyzer::new(Box::new(KeywordCompetitorIndex::new(&names)));
    let analysis = analyzer.analyze_content(&posts, &comments, profile);

    tracing::info!(
        posts = analysis.posts_analyzed,
        comments = analysis.comments_analyzed,
        signals = analysis.signals.len(),
        "analysis complete"
    );
    print_json(&analysis)
}

pub(crate) fn run_jtbd(
    title: &str,
    summary: Option<&str>,
    profile: BusinessProfileType,
    uvp_path: Option<&Path>,
) -> anyhow::Result<()> {
    let uvp: Option<UvpData> = uvp_path.map(read_json).transpose()?;
    print_json(&validate_jtbd(title, summary, profile, uvp.as_ref()))
}
