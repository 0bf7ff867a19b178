use bytemuck::Pod;

use crate::{error::Error, gl::GlApi};

/// Creates a buffer object, binds it to `target` and uploads `data`.
///
/// The buffer stays bound to `target` on return.
pub(super) fn create_buffer_with<G: GlApi, T: Pod>(
    gl: &G,
    buffer_type: &str,
    target: u32,
    data: &[T],
    usage: u32,
) -> Result<G::Buffer, Error> {
    let buffer = gl
        .create_buffer()
        .map_err(|e| Error::buffer_creation_failed(buffer_type, &e))?;

    gl.bind_buffer(target, Some(buffer));
    buffer_upload_array(gl, target, data, usage);

    Ok(buffer)
}

/// Uploads an array of plain-old-data elements to the buffer bound at
/// `target`.
pub(super) fn buffer_upload_array<G: GlApi, T: Pod>(gl: &G, target: u32, data: &[T], usage: u32) {
    gl.buffer_data(target, bytemuck::cast_slice(data), usage);
}
