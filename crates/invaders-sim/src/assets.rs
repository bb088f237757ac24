//! Asset manifest: descriptors for the shaders, textures, meshes and
//! materials the scene asks the renderer to load.
//!
//! Loading is the renderer's job. This module only records what was asked
//! for and checks that entities refer to assets that exist.

use std::collections::BTreeMap;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use invaders_core::enums::{TextureFilter, WrapMode};
use invaders_core::error::SceneError;
use invaders_core::records::SceneFile;

/// A vertex + fragment shader pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaderAsset {
    pub name: String,
    pub vertex: String,
    pub fragment: String,
}

/// Texture dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextureKind {
    Lut1D,
    Texture2D,
    Lut3D,
    Cubemap,
}

/// Where a texture's texels come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source")]
pub enum TextureSource {
    File { path: String },
    /// 1x1 RGB texel.
    Solid { rgb: [f32; 3] },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureAsset {
    pub name: String,
    pub kind: TextureKind,
    #[serde(flatten)]
    pub source: TextureSource,
    #[serde(default)]
    pub min_filter: TextureFilter,
    #[serde(default)]
    pub mag_filter: TextureFilter,
    #[serde(default)]
    pub wrap: WrapMode,
}

/// How a mesh is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source")]
pub enum MeshSource {
    Obj { path: String },
    /// Z-up plane of `size`, UVs repeated `tiling` times.
    Plane { size: Vec2, tiling: Vec2 },
    IcoSphere { subdivisions: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshAsset {
    pub name: String,
    #[serde(flatten)]
    pub source: MeshSource,
}

/// A material uniform value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Uniform {
    Int(i32),
    Float(f32),
    Vec3(Vec3),
    /// Name of a texture asset.
    Texture(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialAsset {
    pub name: String,
    /// Name of a shader asset.
    pub shader: String,
    pub uniforms: BTreeMap<String, Uniform>,
}

impl MaterialAsset {
    pub fn new(name: &str, shader: &str) -> Self {
        Self {
            name: name.to_string(),
            shader: shader.to_string(),
            uniforms: BTreeMap::new(),
        }
    }

    pub fn set(mut self, uniform: &str, value: Uniform) -> Self {
        self.uniforms.insert(uniform.to_string(), value);
        self
    }

    pub fn texture(self, uniform: &str, texture: &str) -> Self {
        self.set(uniform, Uniform::Texture(texture.to_string()))
    }
}

/// Everything the scene asked the renderer to load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    pub shaders: Vec<ShaderAsset>,
    pub textures: Vec<TextureAsset>,
    pub meshes: Vec<MeshAsset>,
    pub materials: Vec<MaterialAsset>,
}

impl AssetManifest {
    pub fn add_shader(&mut self, name: &str, vertex: &str, fragment: &str) {
        self.shaders.push(ShaderAsset {
            name: name.to_string(),
            vertex: vertex.to_string(),
            fragment: fragment.to_string(),
        });
    }

    pub fn add_texture(&mut self, name: &str, kind: TextureKind, path: &str) -> &mut TextureAsset {
        self.push_texture(name, kind, TextureSource::File {
            path: path.to_string(),
        })
    }

    pub fn add_solid_texture(&mut self, name: &str, rgb: [f32; 3]) -> &mut TextureAsset {
        self.push_texture(name, TextureKind::Texture2D, TextureSource::Solid { rgb })
    }

    fn push_texture(
        &mut self,
        name: &str,
        kind: TextureKind,
        source: TextureSource,
    ) -> &mut TextureAsset {
        self.textures.push(TextureAsset {
            name: name.to_string(),
            kind,
            source,
            min_filter: TextureFilter::default(),
            mag_filter: TextureFilter::default(),
            wrap: WrapMode::default(),
        });
        let last = self.textures.len() - 1;
        &mut self.textures[last]
    }

    pub fn add_mesh(&mut self, name: &str, source: MeshSource) {
        self.meshes.push(MeshAsset {
            name: name.to_string(),
            source,
        });
    }

    pub fn add_material(&mut self, material: MaterialAsset) {
        self.materials.push(material);
    }

    pub fn has_shader(&self, name: &str) -> bool {
        self.shaders.iter().any(|s| s.name == name)
    }

    pub fn has_texture(&self, name: &str) -> bool {
        self.textures.iter().any(|t| t.name == name)
    }

    pub fn has_mesh(&self, name: &str) -> bool {
        self.meshes.iter().any(|m| m.name == name)
    }

    pub fn has_material(&self, name: &str) -> bool {
        self.materials.iter().any(|m| m.name == name)
    }

    /// Check that materials and scene entities only name declared assets.
    pub fn validate(&self, scene: &SceneFile) -> Result<(), SceneError> {
        for material in &self.materials {
            if !self.has_shader(&material.shader) {
                return Err(SceneError::UnknownAsset(format!(
                    "shader '{}' used by material '{}'",
                    material.shader, material.name
                )));
            }
            for value in material.uniforms.values() {
                if let Uniform::Texture(texture) = value {
                    if !self.has_texture(texture) {
                        return Err(SceneError::UnknownAsset(format!(
                            "texture '{}' used by material '{}'",
                            texture, material.name
                        )));
                    }
                }
            }
        }

        let environment = &scene.environment;
        for texture in [&environment.skybox_texture, &environment.color_lut]
            .into_iter()
            .flatten()
        {
            if !self.has_texture(texture) {
                return Err(SceneError::UnknownAsset(format!("environment texture '{texture}'")));
            }
        }
        if let Some(shader) = &environment.skybox_shader {
            if !self.has_shader(shader) {
                return Err(SceneError::UnknownAsset(format!("skybox shader '{shader}'")));
            }
        }

        for entity in &scene.entities {
            if let Some(render) = &entity.render {
                if !self.has_mesh(&render.mesh) {
                    return Err(SceneError::UnknownAsset(format!(
                        "mesh '{}' on entity '{}'",
                        render.mesh, entity.name
                    )));
                }
                if !self.has_material(&render.material) {
                    return Err(SceneError::UnknownAsset(format!(
                        "material '{}' on entity '{}'",
                        render.material, entity.name
                    )));
                }
            }
        }
        Ok(())
    }
}
