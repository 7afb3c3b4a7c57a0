use bevy::prelude::{Component, Handle, Image};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use face_shape_api::SetCameraRequest;

/// The sprite showing the latest camera frame behind the overlay.
#[derive(Component)]
pub struct WebcamTexture {
    pub image: Handle<Image>,
}

pub fn blank_frame(width: u32, height: u32) -> Image {
    Image::new_fill(
        frame_size(width, height),
        TextureDimension::D2,
        &[0, 0, 0, 255],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

pub fn camera_frame(request: &SetCameraRequest) -> Image {
    Image::new(
        frame_size(request.width, request.height),
        TextureDimension::D2,
        request.payload.to_vec(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

fn frame_size(width: u32, height: u32) -> Extent3d {
    Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    }
}
