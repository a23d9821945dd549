use anyhow::{Context, Result};
use blog_client::{BlogClient, Post};
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;

const DEFAULT_SERVER: &str = "http://localhost:5000";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, env = "BLOG_SERVER_URL", default_value = DEFAULT_SERVER)]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all posts, newest first
    List,

    /// Publish a new post, then show the refreshed list
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let client = BlogClient::new(cli.server);
    println!("🔌 Connecting to: {}", client.base_url());

    match &cli.command {
        Commands::List => {
            let posts = client.list_posts().await.context("Failed to list posts")?;
            print_posts(&posts);
        }

        Commands::Create { title, content } => {
            println!("📝 Creating new post...");

            match client.create_post(title.as_str(), content.as_str()).await {
                Ok(created) => {
                    for post in &created {
                        println!("{} #{}", "✅ Post created".green(), post.id);
                    }
                }
                // Same rule as the web form: rejected before anything is sent
                Err(e) if e.is_invalid_request() => {
                    eprintln!("{} {}", "❌".red(), e.message().red());
                    std::process::exit(2);
                }
                Err(e) => {
                    eprintln!("{} {}", "❌ Failed to create post:".red(), e.message());
                    std::process::exit(1);
                }
            }

            let posts = client.list_posts().await.context("Failed to list posts")?;
            print_posts(&posts);
        }
    }

    Ok(())
}

fn print_posts(posts: &[Post]) {
    println!("📋 {} posts", posts.len());
    println!();

    if posts.is_empty() {
        println!("   No posts yet");
        return;
    }

    for post in posts {
        println!(
            "   [{}] {}",
            post.id,
            post.title.as_deref().unwrap_or("(untitled)").bold()
        );
        println!(
            "      {}",
            post.created_at.with_timezone(&Local).format("%x %X")
        );
        println!("      {}", truncate(post.content.as_deref().unwrap_or(""), 60));
        println!();
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("привет мир", 6), "привет...");
    }

    #[test]
    #[serial]
    fn server_defaults_to_local_port() {
        std::env::remove_var("BLOG_SERVER_URL");

        let cli = Cli::try_parse_from(["blog-cli", "list"]).unwrap();
        assert_eq!(cli.server, DEFAULT_SERVER);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    #[serial]
    fn server_url_is_read_from_environment() {
        std::env::set_var("BLOG_SERVER_URL", "http://blog.internal:8080");

        let cli = Cli::try_parse_from(["blog-cli", "list"]).unwrap();
        assert_eq!(cli.server, "http://blog.internal:8080");

        std::env::remove_var("BLOG_SERVER_URL");
    }

    #[test]
    fn create_requires_title_and_content_flags() {
        assert!(Cli::try_parse_from(["blog-cli", "create", "--title", "A"]).is_err());

        let cli =
            Cli::try_parse_from(["blog-cli", "create", "--title", "A", "--content", "B"]).unwrap();
        match cli.command {
            Commands::Create { title, content } => {
                assert_eq!(title, "A");
                assert_eq!(content, "B");
            }
            _ => panic!("expected create"),
        }
    }
}
