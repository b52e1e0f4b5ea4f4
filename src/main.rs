//! CLI entry point for mdblog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mdblog::repository::DEFAULT_RELATED_LIMIT;
use mdblog::Blog;

#[derive(Parser)]
#[command(name = "mdblog")]
#[command(version)]
#[command(about = "A markdown-backed blog content engine", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all posts, newest first
    List {
        /// Emit posts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single post by slug
    Show {
        /// Slug of the post
        slug: String,

        /// Emit the post as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories with post counts
    Categories,

    /// List tags with post counts
    Tags,

    /// Show posts related to the given post
    Related {
        /// Slug of the reference post
        slug: String,

        /// Maximum number of related posts
        #[arg(short, long, default_value_t = DEFAULT_RELATED_LIMIT)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdblog=debug,info"
    } else {
        "mdblog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let blog = Blog::open(&base_dir)?;

    match cli.command {
        Commands::List { json } => {
            let posts = blog.repository.all();
            if json {
                println!("{}", serde_json::to_string_pretty(posts)?);
            } else {
                println!("Posts ({}):", posts.len());
                for post in posts {
                    println!(
                        "  {} - {} [{}]",
                        post.date.format("%Y-%m-%d"),
                        post.title,
                        post.slug
                    );
                }
            }
        }

        Commands::Show { slug, json } => match blog.repository.get_by_slug(&slug) {
            Some(post) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(post)?);
                } else {
                    println!("{}", post.title);
                    println!("{} by {}", post.formatted_date, post.author);
                    if !post.category.is_empty() {
                        println!("Category: {}", post.category);
                    }
                    if !post.tags.is_empty() {
                        println!("Tags: {}", post.tags.join(", "));
                    }
                    println!();
                    println!("{}", post.content);
                }
            }
            None => {
                anyhow::bail!("No post with slug: {}", slug);
            }
        },

        Commands::Categories => {
            let counts = blog.repository.category_counts();
            println!("Categories ({}):", counts.len());
            let mut counts: Vec<_> = counts.into_iter().collect();
            counts.sort_by(|a, b| b.1.cmp(&a.1));
            for (category, count) in counts {
                println!("  {} ({})", category, count);
            }
        }

        Commands::Tags => {
            let counts = blog.repository.tag_counts();
            println!("Tags ({}):", counts.len());
            let mut counts: Vec<_> = counts.into_iter().collect();
            counts.sort_by(|a, b| b.1.cmp(&a.1));
            for (tag, count) in counts {
                println!("  {} ({})", tag, count);
            }
        }

        Commands::Related { slug, limit } => {
            let Some(post) = blog.repository.get_by_slug(&slug) else {
                anyhow::bail!("No post with slug: {}", slug);
            };
            let related = blog.repository.related(post, limit);
            println!("Related to \"{}\" ({}):", post.title, related.len());
            for other in related {
                println!(
                    "  {} - {} [{}]",
                    other.date.format("%Y-%m-%d"),
                    other.title,
                    other.slug
                );
            }
        }
    }

    Ok(())
}
