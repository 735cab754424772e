//! CPU-side mesh data for the handful of primitives the gallery needs.
//!
//! Everything is indexed triangles, counter-clockwise when seen from the side
//! the normal points to. Texture coordinates have `v = 0` at the top edge so
//! image rows map straight onto the surface.

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    fn push_quad(&mut self, corners: [[f32; 3]; 4], normal: [f32; 3]) {
        // corners: top-left, top-right, bottom-right, bottom-left
        let base = self.vertices.len() as u16;
        let uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        for (position, uv) in corners.into_iter().zip(uvs) {
            self.vertices.push(Vertex {
                position,
                normal,
                uv,
            });
        }
        self.indices
            .extend_from_slice(&[base, base + 3, base + 2, base, base + 2, base + 1]);
    }
}

/// A `width` x `height` plane in the XY plane facing +Z, centred at the origin.
pub fn plane(width: f32, height: f32) -> MeshData {
    let (hw, hh) = (width * 0.5, height * 0.5);
    let mut mesh = MeshData::default();
    mesh.push_quad(
        [[-hw, hh, 0.0], [hw, hh, 0.0], [hw, -hh, 0.0], [-hw, -hh, 0.0]],
        [0.0, 0.0, 1.0],
    );
    mesh
}

/// An axis-aligned box centred at the origin with flat-shaded faces.
pub fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let (x, y, z) = (width * 0.5, height * 0.5, depth * 0.5);
    let mut mesh = MeshData::default();
    // front (+Z)
    mesh.push_quad(
        [[-x, y, z], [x, y, z], [x, -y, z], [-x, -y, z]],
        [0.0, 0.0, 1.0],
    );
    // back (-Z)
    mesh.push_quad(
        [[x, y, -z], [-x, y, -z], [-x, -y, -z], [x, -y, -z]],
        [0.0, 0.0, -1.0],
    );
    // left (-X)
    mesh.push_quad(
        [[-x, y, -z], [-x, y, z], [-x, -y, z], [-x, -y, -z]],
        [-1.0, 0.0, 0.0],
    );
    // right (+X)
    mesh.push_quad(
        [[x, y, z], [x, y, -z], [x, -y, -z], [x, -y, z]],
        [1.0, 0.0, 0.0],
    );
    // top (+Y)
    mesh.push_quad(
        [[-x, y, -z], [x, y, -z], [x, y, z], [-x, y, z]],
        [0.0, 1.0, 0.0],
    );
    // bottom (-Y)
    mesh.push_quad(
        [[-x, -y, z], [x, -y, z], [x, -y, -z], [-x, -y, -z]],
        [0.0, -1.0, 0.0],
    );
    mesh
}
