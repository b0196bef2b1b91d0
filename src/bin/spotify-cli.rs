use clap::{Parser, Subcommand};
use serde_json::Value;
use spotify_wrapper::{Page, Spotify};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spotify-cli")]
#[command(about = "Read-only queries against the Spotify Web API", long_about = None)]
struct Cli {
    /// Spotify client ID (can also be set via SPOTIFY_CLIENT_ID env var)
    #[arg(long, env = "SPOTIFY_CLIENT_ID")]
    client_id: String,

    /// Spotify client secret (can also be set via SPOTIFY_CLIENT_SECRET env var)
    #[arg(long, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,

    /// Market (ISO 3166-1 alpha-2 country code) for track, album and playlist lookups
    #[arg(short, long, global = true)]
    market: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a single track
    Track { id: String },
    /// Show several tracks
    Tracks {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Show audio features for a track
    AudioFeatures { id: String },
    /// Show an album
    Album { id: String },
    /// List new album releases
    NewReleases {
        /// Country (ISO 3166-1 alpha-2) to list releases for
        #[arg(long)]
        country: Option<String>,

        #[arg(short, long, default_value_t = 20)]
        limit: u32,

        #[arg(short, long, default_value_t = 0)]
        offset: u32,
    },
    /// Show an artist
    Artist { id: String },
    /// Show a playlist
    Playlist { id: String },
    /// List featured playlists
    FeaturedPlaylists {
        /// Country (ISO 3166-1 alpha-2) to list playlists for
        #[arg(long)]
        country: Option<String>,

        #[arg(short, long, default_value_t = 20)]
        limit: u32,

        /// Locale such as "sv_SE"
        #[arg(long)]
        locale: Option<String>,
    },
    /// List genres available as recommendation seeds
    Genres,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let spotify = Spotify::new(cli.client_id, cli.client_secret).await?;
    let market = cli.market.as_deref();

    let result: Value = match cli.command {
        Commands::Track { id } => spotify.tracks.get_track(&id, market).await?,
        Commands::Tracks { ids } => {
            spotify
                .tracks
                .get_several_tracks(ids.as_slice(), market)
                .await?
        }
        Commands::AudioFeatures { id } => spotify.tracks.get_track_audio_features(&id).await?,
        Commands::Album { id } => spotify.albums.get_album(&id, market).await?,
        Commands::NewReleases {
            country,
            limit,
            offset,
        } => {
            spotify
                .albums
                .get_new_releases(country.as_deref(), Page::new(limit, offset))
                .await?
        }
        Commands::Artist { id } => spotify.artists.get_artist(&id).await?,
        Commands::Playlist { id } => spotify.playlists.get_playlist(&id, market, None).await?,
        Commands::FeaturedPlaylists {
            country,
            limit,
            locale,
        } => {
            spotify
                .playlists
                .get_featured_playlists(
                    country.as_deref(),
                    locale.as_deref(),
                    Page::limit(limit),
                )
                .await?
        }
        Commands::Genres => spotify.genres.get_available_genre_seeds().await?,
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_is_separate_from_market() {
        let cli = Cli::try_parse_from([
            "spotify-cli",
            "--client-id",
            "id",
            "--client-secret",
            "secret",
            "--market",
            "US",
            "new-releases",
            "--country",
            "SE",
            "--limit",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.market.as_deref(), Some("US"));
        match cli.command {
            Commands::NewReleases { country, limit, .. } => {
                assert_eq!(country.as_deref(), Some("SE"));
                assert_eq!(limit, 5);
            }
            _ => panic!("expected new-releases"),
        }
    }

    #[test]
    fn test_featured_playlists_country_defaults_to_none() {
        let cli = Cli::try_parse_from([
            "spotify-cli",
            "--client-id",
            "id",
            "--client-secret",
            "secret",
            "featured-playlists",
            "--market",
            "DE",
        ])
        .unwrap();

        assert_eq!(cli.market.as_deref(), Some("DE"));
        match cli.command {
            Commands::FeaturedPlaylists { country, .. } => assert_eq!(country, None),
            _ => panic!("expected featured-playlists"),
        }
    }
}
