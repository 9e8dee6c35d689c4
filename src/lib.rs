//! Searchable, paginated patient list of a sleep clinic.
//!
//! The list logic ([`view`], [`components`]) performs no I/O and is always
//! compiled. The `server` feature adds an Actix-web preview shell backed by
//! an in-memory patient store.

pub mod breakpoint;
pub mod components;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod pagination;
pub mod repository;
pub mod services;
pub mod view;

#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_files::Files;
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};

    use crate::components::templates;
    use crate::models::config::ServerConfig;
    use crate::repository::memory::InMemoryPatientRepository;
    use crate::routes::assets::stylesheet;
    use crate::routes::patients::{index, patient_action, show_patients};

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let page_size = server_config
            .page_size()
            .map_err(|e| std::io::Error::other(format!("Invalid page size: {e}")))?;

        let repo = InMemoryPatientRepository::from_json_file(&server_config.fixtures_path)
            .map_err(|e| {
                std::io::Error::other(format!(
                    "Failed to load patients from {}: {e}",
                    server_config.fixtures_path
                ))
            })?;
        log::info!(
            "Loaded {} patients from {}",
            repo.len(),
            server_config.fixtures_path
        );
        // One store shared by every worker so deletes are visible everywhere.
        let repo = web::Data::new(repo);

        let secret_key = Key::try_from(server_config.secret.as_bytes())
            .map_err(|e| std::io::Error::other(format!("Invalid secret: {e}")))?;
        let message_store = CookieMessageStore::builder(secret_key).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let tera = templates()
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        let assets_dir = server_config.assets_dir.clone();

        HttpServer::new(move || {
            App::new()
                .wrap(message_framework.clone())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(stylesheet)
                .service(Files::new("/assets/static", &assets_dir))
                .service(index)
                .service(show_patients)
                .service(patient_action)
                .app_data(web::Data::new(tera.clone()))
                .app_data(repo.clone())
                .app_data(web::Data::new(page_size))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
