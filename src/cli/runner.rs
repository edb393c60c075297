//! Command execution

use super::commands::{Cli, Commands};
use crate::config::ListConfig;
use crate::controller::PaginationController;
use crate::error::Result;
use crate::render::{ItemKey, RenderState};
use crate::types::JsonValue;
use tracing::info;

/// Executes CLI commands
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Browse {
                endpoint,
                page_size,
                collection_path,
                columns,
                entity,
                label_field,
                max_pages,
            } => {
                self.browse(
                    endpoint,
                    *page_size,
                    collection_path,
                    *columns,
                    entity,
                    label_field,
                    *max_pages,
                )
                .await
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    async fn browse(
        &self,
        endpoint: &str,
        page_size: u32,
        collection_path: &str,
        columns: u32,
        entity: &str,
        label_field: &str,
        max_pages: usize,
    ) -> Result<()> {
        let config = ListConfig::builder()
            .endpoint(endpoint)
            .items_per_page(page_size)
            .collection_path(collection_path)
            .column_count(columns)
            .empty_message_entity(entity)
            .build();

        let mut controller = PaginationController::with_shared_client(config);
        let renderer = |item: &JsonValue, key: &ItemKey| {
            let label = item
                .get(label_field)
                .and_then(JsonValue::as_str)
                .map_or_else(|| item.to_string(), ToString::to_string);
            format!("[{key}] {label}")
        };

        let mut printed = 0;
        loop {
            controller.settle().await;

            if let Some(message) = controller.last_error() {
                // Later-page failures keep already-printed rows on screen
                println!("Error: {message}");
                break;
            }

            match controller.render_state() {
                RenderState::Inert | RenderState::Loading { .. } => break,
                RenderState::Error { message } | RenderState::Empty { message } => {
                    println!("{message}");
                    break;
                }
                RenderState::List(view) => {
                    let rendered = view.render_with(&renderer);
                    for chunk in rendered[printed..].chunks(columns.max(1) as usize) {
                        println!("{}", chunk.join("  |  "));
                    }
                    printed = rendered.len();

                    let pages = controller.store().page_count();
                    let walk_more = controller.has_next_page()
                        && (max_pages == 0 || pages < max_pages);
                    if !walk_more {
                        info!("done: {printed} rows in {pages} pages");
                        break;
                    }
                    controller.on_end_reached();
                }
            }
        }

        Ok(())
    }
}
