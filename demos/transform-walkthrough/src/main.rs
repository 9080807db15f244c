use std::f32::consts::FRAC_PI_4;

use glmath::algebra::matrix::Matrix4f;
use glmath::algebra::quaternion::Quaternionf;
use glmath::algebra::vector::{Vector3f, Vector4f};
use glmath::debug::dump;
use log::info;

fn main() {
    env_logger::init();

    let view = Matrix4f::look_at(
        &Vector3f::new(0.0, 2.0, 6.0),
        &Vector3f::new(0.0, 0.0, 0.0),
        &Vector3f::new(0.0, 1.0, 0.0),
    );
    let projection = Matrix4f::perspective(FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);

    let rotation = Quaternionf::from_axis_angle(&Vector3f::new(0.0, 1.0, 0.0), FRAC_PI_4);
    let model = Matrix4f::from_rotation_translation_scale(
        &rotation,
        &Vector3f::new(1.0, 0.0, -2.0),
        &Vector3f::new(2.0, 2.0, 2.0),
    );
    info!("Model rotation: {rotation}");

    let model_view_projection = projection * view * model;
    info!("Model-view-projection:");
    dump(Some(&model_view_projection));

    let mut corner = Vector4f::new(1.0, 1.0, 1.0, 1.0);
    corner.transform_mat4(&model_view_projection);
    info!("Clip-space corner: {corner}");

    let mut restored = model;
    restored.invert();
    restored.multiply(&model);
    info!("Model * inverse(model):");
    dump(Some(&restored));

    dump::<f32>(None);
}
