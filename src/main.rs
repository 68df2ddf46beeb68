use anyhow::Context;
use clap::Parser;
use lopam_admin::{cli, clock, commands, config, error, persist, source, storage};
use lopam_common::{
    find_article, published_articles, Article, ContentStore, DeleteOutcome, EditingController,
    Gatekeeper, Persistence, Project, RecordKind,
};
use cli::{Cli, Commands};
use clock::SystemClock;
use config::Config;
use error::AdminError;
use storage::FileStore;
use tracing_subscriber::EnvFilter;

type Controller = EditingController<Box<dyn Persistence>, SystemClock>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()
        .context("設定の読み込みに失敗しました")?
        .with_overrides(cli.data.clone(), cli.save);

    match cli.command {
        Commands::Login { username, password } => {
            let mut gate = open_gatekeeper(&config)?;
            let username = match username {
                Some(u) => u,
                None => dialoguer::Input::<String>::new()
                    .with_prompt("Username")
                    .interact_text()
                    .map_err(AdminError::from)?,
            };
            let password = match password {
                Some(p) => p,
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .interact()
                    .map_err(AdminError::from)?,
            };

            if gate.authenticate(&username, &password).map_err(AdminError::from)? {
                println!("✔ ログインしました");
            } else {
                anyhow::bail!("Invalid username or password");
            }
        }

        Commands::Logout => {
            let mut gate = open_gatekeeper(&config)?;
            gate.logout().map_err(AdminError::from)?;
            println!("✔ ログアウトしました");
        }

        Commands::Status => {
            let gate = open_gatekeeper(&config)?;
            println!("状態:");
            println!("  ログイン: {}", if gate.is_authenticated() { "済み" } else { "未ログイン" });
            println!("  データ: {}", config.data_path);
            println!("  保存方法: {:?}", config.save_mode);
            println!("  保存API: {}", config.save_endpoint);
            println!("  認証ストア: {}", gate.storage().path().display());
        }

        Commands::Config { endpoint } => {
            let mut config = config;
            if let Some(endpoint) = endpoint {
                config.save_endpoint = endpoint;
            }
            config.save()?;
            println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
        }

        Commands::List { kind } => {
            let content = ContentStore::from_document(source::load_document(&config.data_path));
            match kind {
                RecordKind::Article => {
                    for article in &content.articles {
                        let mark = if article.published { "公開" } else { "下書き" };
                        println!("{} [{}] {}", commands::summary_line(article), mark, article.date);
                    }
                }
                RecordKind::Project => {
                    for project in &content.projects {
                        println!("{} ({})", commands::summary_line(project), project.role);
                    }
                }
            }
        }

        Commands::Show { kind, id } => {
            let content = ContentStore::from_document(source::load_document(&config.data_path));
            let json = match kind {
                RecordKind::Article => content.articles.get(&id).map(serde_json::to_string_pretty),
                RecordKind::Project => content.projects.get(&id).map(serde_json::to_string_pretty),
            };
            match json {
                Some(json) => println!("{}", json.map_err(AdminError::from)?),
                None => anyhow::bail!("{} not found: {}", kind, id),
            }
        }

        Commands::Writings => {
            let content = ContentStore::from_document(source::load_document(&config.data_path));
            for article in published_articles(&content.articles) {
                println!("{}  {}  ({})", article.date, article.title, article.read_time);
                println!("    {}", article.excerpt);
                if !article.tags.is_empty() {
                    println!("    #{}", article.tags.join(" #"));
                }
            }
        }

        Commands::Read { slug } => {
            let content = ContentStore::from_document(source::load_document(&config.data_path));
            match find_article(&content.articles, &slug) {
                Some(article) => {
                    println!("{}\n{} · {}\n", article.title, article.date, article.read_time);
                    println!("{}", article.content);
                }
                None => anyhow::bail!("Article not found: {}", slug),
            }
        }

        Commands::Add { kind, edits } => {
            let mut ctrl = open_controller(&config)?;
            match kind {
                RecordKind::Article => {
                    let outcome = commands::add_record::<Article, _, _>(&mut ctrl, &edits)?;
                    commands::report_commit::<Article>(&outcome)?;
                }
                RecordKind::Project => {
                    let outcome = commands::add_record::<Project, _, _>(&mut ctrl, &edits)?;
                    commands::report_commit::<Project>(&outcome)?;
                }
            }
        }

        Commands::Edit { kind, id, edits } => {
            let mut ctrl = open_controller(&config)?;
            match kind {
                RecordKind::Article => {
                    let outcome = commands::edit_record::<Article, _, _>(&mut ctrl, &id, &edits)?;
                    commands::report_commit::<Article>(&outcome)?;
                }
                RecordKind::Project => {
                    let outcome = commands::edit_record::<Project, _, _>(&mut ctrl, &id, &edits)?;
                    commands::report_commit::<Project>(&outcome)?;
                }
            }
        }

        Commands::Delete { kind, id, yes } => {
            let mut ctrl = open_controller(&config)?;
            let outcome = match (kind, yes) {
                (RecordKind::Article, true) => {
                    commands::delete_record::<Article, _, _>(&mut ctrl, &id, &mut commands::AssumeYes)?
                }
                (RecordKind::Article, false) => {
                    commands::delete_record::<Article, _, _>(&mut ctrl, &id, &mut commands::PromptConfirm)?
                }
                (RecordKind::Project, true) => {
                    commands::delete_record::<Project, _, _>(&mut ctrl, &id, &mut commands::AssumeYes)?
                }
                (RecordKind::Project, false) => {
                    commands::delete_record::<Project, _, _>(&mut ctrl, &id, &mut commands::PromptConfirm)?
                }
            };
            match outcome {
                DeleteOutcome::Deleted { persisted } => {
                    println!("✔ {} を削除しました: {}", kind, id);
                    if !persisted {
                        return Err(AdminError::NotPersisted.into());
                    }
                }
                DeleteOutcome::Declined => println!("削除を取り消しました"),
            }
        }

        Commands::Export { output } => {
            let document = source::load_document(&config.data_path);
            let json = document.to_json_pretty().map_err(AdminError::from)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("write {}", path.display()))?;
                    println!("✔ 書き出しました: {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Import { input } => {
            let mut ctrl = open_controller(&config)?;
            let document = lopam_common::ContentDocument::from_file(&input)
                .with_context(|| format!("read {}", input.display()))?;
            let (articles, projects) = (document.articles.len(), document.projects.len());
            let persisted = ctrl.import(document);
            println!("✔ 読み込みました: 記事 {}件, プロジェクト {}件", articles, projects);
            if !persisted {
                return Err(AdminError::NotPersisted.into());
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_gatekeeper(config: &Config) -> error::Result<Gatekeeper<FileStore>> {
    let store = FileStore::open(&Config::storage_path()?)?;
    Ok(Gatekeeper::with_credentials(store, config.credentials()))
}

/// ログインを確認してから編集コントローラを作成
fn open_controller(config: &Config) -> error::Result<Controller> {
    let gate = open_gatekeeper(config)?;
    commands::require_login(&gate)?;

    let persistence = persist::from_config(config)?;
    let content = ContentStore::from_document(source::load_document(&config.data_path));
    Ok(EditingController::new(content, persistence, SystemClock))
}
