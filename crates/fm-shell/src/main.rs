//! fm Shell - Main Entry Point

use anyhow::{bail, Context};
use fm_shell::args::USAGE;
use fm_shell::{Application, Args, ShellConfig};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse(std::env::args().skip(1)).context(USAGE)?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => ShellConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ShellConfig::default(),
    };

    let mut uris = args.uris.into_iter();
    let first = uris.next().unwrap_or_else(|| config.home_uri.clone());

    log::info!("Starting fm shell on {}", first);
    let mut app = Application::new(config);
    let id = app.open_window(&first)?;
    app.run_until_idle();

    for uri in uris {
        if app.window(id).is_none() {
            break;
        }
        app.navigate(id, &uri)?;
        app.run_until_idle();
    }

    let Some(window) = app.window(id) else {
        bail!("window closed, could not display {}", first);
    };
    let Some(info) = window.current_info() else {
        bail!("nothing committed for {}", first);
    };

    println!("Location: {}", info.actual.uri);
    println!("Type:     {}", info.content_type().unwrap_or("unknown"));
    println!("Title:    {}", window.title());
    println!("View as:");
    for view in &info.content_identifiers {
        let marker = if window.content_view_iid() == Some(view.iid.as_str()) {
            '*'
        } else {
            ' '
        };
        println!("  {} {} ({})", marker, view.name, view.iid);
    }
    for meta in window.meta_views() {
        println!("Sidebar:  {}", meta.label().unwrap_or(meta.iid()));
    }
    println!("Back:");
    for bookmark in window.back_list() {
        println!("  {}", bookmark.uri());
    }
    println!("History:");
    for bookmark in app.history().entries() {
        println!("  {} ({})", bookmark.name(), bookmark.uri());
    }

    Ok(())
}
