use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use face_shape::ShapeCell;

use crate::overlay::FrameView;
use crate::tracking::{ShapeTracker, TrackedFace};
use crate::webcam::{blank_frame, WebcamTexture};

mod api;
mod config;
mod overlay;
mod panel;
mod tracking;
mod webcam;

#[derive(Parser)]
struct Options {
    #[arg(long, default_value = "127.0.0.1:8888")]
    pub api_bind: String,
    #[arg(long, short = 'W', default_value = "640")]
    pub width: u32,
    #[arg(long, short = 'H', default_value = "480")]
    pub height: u32,
    /// JSON file overriding anchor indices and classifier thresholds.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let options = Options::parse();
    let classifier_config = config::load_classifier_config(options.config.as_deref())?;
    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;

    let api_addr: SocketAddr = options.api_bind.parse()?;
    let shape = Arc::new(ShapeCell::new());
    let (api_state, api_resource) = api::ApiState::new(shape.clone());
    runtime.spawn(async move {
        tracing::info!("serving API on {}", api_addr);
        let app = api::new_api().with_state(api_state);
        if let Err(err) = axum_server::bind(api_addr).serve(app.into_make_service()).await {
            tracing::error!("failed to serve API: {}", err);
        }
    });

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Face Shape Detector".into(),
                        resolution: (options.width as f32, options.height as f32).into(),
                        ..default()
                    }),
                    ..default()
                })
                .disable::<LogPlugin>(),
        )
        .add_plugins(EguiPlugin)
        .insert_resource(api_resource)
        .insert_resource(ShapeTracker::new(&classifier_config, shape))
        .init_resource::<TrackedFace>()
        .insert_resource(FrameView::new(options.width, options.height))
        .add_systems(Startup, (init, overlay::configure_gizmos))
        .add_systems(
            Update,
            (
                api::update_api,
                overlay::draw_contours,
                overlay::update_markers,
                panel::shape_panel,
            )
                .chain(),
        )
        .run();

    Ok(())
}

fn init(mut commands: Commands, mut images: ResMut<Assets<Image>>, view: Res<FrameView>) {
    commands.spawn(Camera2dBundle::default());

    let image = images.add(blank_frame(view.size.x as u32, view.size.y as u32));
    commands.spawn((
        SpriteBundle {
            texture: image.clone(),
            sprite: Sprite {
                custom_size: Some(view.size),
                ..default()
            },
            ..default()
        },
        WebcamTexture { image },
    ));
}
