//! The default scene layer: assets, lights, camera, arena, player, bolt
//! and the enemy formation, described as saveable records.

use glam::{Vec2, Vec3};
use log::info;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use invaders_core::behaviour::ScriptedBehaviour;
use invaders_core::components::*;
use invaders_core::constants::*;
use invaders_core::enums::{RigidBodyKind, TextureFilter, WrapMode};
use invaders_core::records::{EntityRecord, EnvironmentRecord, SceneFile};
use invaders_core::types::Transform;

use crate::assets::{AssetManifest, MaterialAsset, MeshSource, TextureKind, Uniform};

// Asset names shared between the manifest and entity records.
const SHADER_GBUFFER: &str = "Deferred - GBuffer Generation";
const SHADER_SKYBOX: &str = "Skybox";
const MESH_MONKEY: &str = "Monkey.obj";
const MESH_TILED_PLANE: &str = "Tiled Plane";
const MAT_BOX: &str = "Box";
const MAT_MONKEY: &str = "Monkey";
const TEX_NORMAL_DEFAULT: &str = "Normal Map Default";

const GREEN: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
const AMBER: Vec3 = Vec3::new(1.0, 0.8, 0.0);

/// A freshly built scene and the assets it needs.
pub struct SceneLayout {
    pub scene: SceneFile,
    pub manifest: AssetManifest,
}

/// Build the demo scene. `rng` places the decorative lights.
pub fn build_default_scene(rng: &mut ChaCha8Rng) -> SceneLayout {
    let manifest = build_manifest();
    let mut entities = Vec::new();

    spawn_lights(&mut entities, rng);
    entities.push(camera());
    entities.push(ground_plane());
    entities.push(player());
    entities.push(bolt());
    entities.push(wall("RightWall", WALL_OFFSET_X));
    entities.push(wall("LeftWall", -WALL_OFFSET_X));
    spawn_enemy_formation(&mut entities);
    entities.push(top_ship());

    let scene = SceneFile {
        version: SCENE_FILE_VERSION,
        environment: EnvironmentRecord {
            skybox_texture: Some("Ocean Cubemap".to_string()),
            skybox_shader: Some(SHADER_SKYBOX.to_string()),
            // The cubemap is Y-up; rotate it into the Z-up world.
            skybox_rotation: Vec3::new(90.0, 0.0, 0.0),
            color_lut: Some("Cool LUT".to_string()),
        },
        entities,
    };

    info!(
        "built default scene: {} entities, {} materials",
        scene.entities.len(),
        manifest.materials.len()
    );

    SceneLayout { scene, manifest }
}

fn build_manifest() -> AssetManifest {
    let mut m = AssetManifest::default();

    m.add_shader(
        SHADER_GBUFFER,
        "shaders/vertex_shaders/basic.glsl",
        "shaders/fragment_shaders/deferred_forward.glsl",
    );
    m.add_shader(
        "Foliage",
        "shaders/vertex_shaders/foliage.glsl",
        "shaders/fragment_shaders/deferred_forward.glsl",
    );
    m.add_shader(
        "Multitexturing",
        "shaders/vertex_shaders/vert_multitextured.glsl",
        "shaders/fragment_shaders/frag_multitextured.glsl",
    );
    m.add_shader(
        "Displacement Mapping",
        "shaders/vertex_shaders/displacement_mapping.glsl",
        "shaders/fragment_shaders/deferred_forward.glsl",
    );
    m.add_shader(
        "Cel Shader",
        "shaders/vertex_shaders/displacement_mapping.glsl",
        "shaders/fragment_shaders/cel_shader.glsl",
    );
    m.add_shader(
        SHADER_SKYBOX,
        "shaders/vertex_shaders/skybox_vert.glsl",
        "shaders/fragment_shaders/skybox_frag.glsl",
    );

    m.add_mesh(MESH_MONKEY, MeshSource::Obj {
        path: "Monkey.obj".to_string(),
    });
    m.add_mesh("Plane", MeshSource::Plane {
        size: Vec2::ONE,
        tiling: Vec2::ONE,
    });
    m.add_mesh(MESH_TILED_PLANE, MeshSource::Plane {
        size: Vec2::splat(100.0),
        tiling: Vec2::splat(20.0),
    });
    m.add_mesh("Sphere", MeshSource::IcoSphere { subdivisions: 5 });

    m.add_texture("Box Diffuse", TextureKind::Texture2D, "textures/box-diffuse.png");
    m.add_texture("Box Specular", TextureKind::Texture2D, "textures/box-specular.png");
    m.add_texture("Monkey UV", TextureKind::Texture2D, "textures/monkey-uvMap.png");
    let leaves = m.add_texture("Leaves", TextureKind::Texture2D, "textures/leaves.png");
    leaves.min_filter = TextureFilter::Nearest;
    leaves.mag_filter = TextureFilter::Nearest;
    m.add_solid_texture(TEX_NORMAL_DEFAULT, [0.5, 0.5, 1.0]);
    m.add_solid_texture("Solid Black", [0.5, 0.5, 0.5]);
    m.add_solid_texture("Solid Grey", [0.0, 0.0, 0.0]);
    m.add_solid_texture("Solid White", [1.0, 1.0, 1.0]);
    let toon = m.add_texture("Toon LUT", TextureKind::Lut1D, "luts/toon-1D.png");
    toon.wrap = WrapMode::ClampToEdge;
    m.add_texture("Ocean Cubemap", TextureKind::Cubemap, "cubemaps/ocean/ocean.jpg");
    m.add_texture("Cool LUT", TextureKind::Lut3D, "luts/cool.CUBE");
    m.add_texture("Displacement Map", TextureKind::Texture2D, "textures/displacement_map.png");
    m.add_texture("Normal Map", TextureKind::Texture2D, "textures/normal_map.png");
    m.add_texture("Bricks Diffuse", TextureKind::Texture2D, "textures/bricks_diffuse.png");
    m.add_texture("Sand", TextureKind::Texture2D, "textures/terrain/sand.png");
    m.add_texture("Grass", TextureKind::Texture2D, "textures/terrain/grass.png");
    m.add_texture("UI Sprite", TextureKind::Texture2D, "textures/ui-sprite.png");

    m.add_material(
        MaterialAsset::new(MAT_BOX, SHADER_GBUFFER)
            .texture("u_Material.AlbedoMap", "Box Diffuse")
            .set("u_Material.Shininess", Uniform::Float(0.1))
            .texture("u_Material.NormalMap", TEX_NORMAL_DEFAULT),
    );
    m.add_material(
        MaterialAsset::new(MAT_MONKEY, SHADER_GBUFFER)
            .texture("u_Material.AlbedoMap", "Monkey UV")
            .texture("u_Material.NormalMap", TEX_NORMAL_DEFAULT)
            .set("u_Material.Shininess", Uniform::Float(0.5)),
    );
    m.add_material(
        MaterialAsset::new("Box-Specular", SHADER_GBUFFER)
            .texture("u_Material.AlbedoMap", "Box Diffuse")
            .texture("u_Material.Specular", "Box Specular")
            .texture("u_Material.NormalMap", TEX_NORMAL_DEFAULT),
    );
    m.add_material(
        MaterialAsset::new("Foliage Shader", "Foliage")
            .texture("u_Material.AlbedoMap", "Leaves")
            .set("u_Material.Shininess", Uniform::Float(0.1))
            .set("u_Material.DiscardThreshold", Uniform::Float(0.1))
            .texture("u_Material.NormalMap", TEX_NORMAL_DEFAULT)
            .set("u_WindDirection", Uniform::Vec3(Vec3::new(1.0, 1.0, 0.0)))
            .set("u_WindStrength", Uniform::Float(0.5))
            .set("u_VerticalScale", Uniform::Float(1.0))
            .set("u_WindSpeed", Uniform::Float(1.0)),
    );
    m.add_material(
        MaterialAsset::new("Toon", "Cel Shader")
            .texture("u_Material.AlbedoMap", "Box Diffuse")
            .texture("u_Material.NormalMap", TEX_NORMAL_DEFAULT)
            .texture("s_ToonTerm", "Toon LUT")
            .set("u_Material.Shininess", Uniform::Float(0.1))
            .set("u_Material.Steps", Uniform::Int(8)),
    );
    m.add_material(
        MaterialAsset::new("Displacement Map", "Displacement Mapping")
            .texture("u_Material.AlbedoMap", "Bricks Diffuse")
            .texture("u_Material.NormalMap", "Normal Map")
            .texture("s_Heightmap", "Displacement Map")
            .set("u_Material.Shininess", Uniform::Float(0.5))
            .set("u_Scale", Uniform::Float(0.1)),
    );
    m.add_material(
        MaterialAsset::new("Tangent Space Normal Map", SHADER_GBUFFER)
            .texture("u_Material.AlbedoMap", "Bricks Diffuse")
            .texture("u_Material.NormalMap", "Normal Map")
            .set("u_Material.Shininess", Uniform::Float(0.5))
            .set("u_Scale", Uniform::Float(0.1)),
    );
    m.add_material(
        MaterialAsset::new("Multitexturing", "Multitexturing")
            .texture("u_Material.DiffuseA", "Sand")
            .texture("u_Material.DiffuseB", "Grass")
            .texture("u_Material.NormalMapA", TEX_NORMAL_DEFAULT)
            .texture("u_Material.NormalMapB", TEX_NORMAL_DEFAULT)
            .set("u_Material.Shininess", Uniform::Float(0.5))
            .set("u_Scale", Uniform::Float(0.1)),
    );

    m
}

/// Entity record with only the required fields filled in.
fn record(name: &str, role: Role, transform: Transform) -> EntityRecord {
    EntityRecord {
        name: name.to_string(),
        role,
        transform,
        parent: None,
        behaviour: None,
        render: None,
        light: None,
        rigid_body: None,
        camera: None,
    }
}

fn monkey_render() -> Option<RenderComponent> {
    Some(RenderComponent {
        mesh: MESH_MONKEY.to_string(),
        material: MAT_MONKEY.to_string(),
    })
}

fn point_light(color: Vec3, radius: f32) -> Option<LightComponent> {
    Some(LightComponent {
        color,
        radius,
        intensity: 1.0,
    })
}

fn box_body(kind: RigidBodyKind, half_extents: Vec3) -> RigidBody {
    RigidBody {
        kind,
        colliders: vec![Collider::Box {
            half_extents,
            offset: Vec3::ZERO,
        }],
        linear_damping: 0.0,
    }
}

/// A "Lights" parent with decorative lights scattered over a disk.
fn spawn_lights(entities: &mut Vec<EntityRecord>, rng: &mut ChaCha8Rng) {
    entities.push(record("Lights", Role::Scenery, Transform::default()));

    for _ in 0..SCENE_LIGHT_COUNT {
        let on_disk = random_in_disk(rng, SCENE_LIGHT_DISK_RADIUS);
        let mut light = record(
            "Light",
            Role::Scenery,
            Transform::from_position(on_disk.extend(1.0)),
        );
        light.parent = Some("Lights".to_string());
        light.light = Some(LightComponent {
            color: Vec3::ONE,
            radius: 200.0,
            intensity: rng.gen_range(0.1..0.4),
        });
        entities.push(light);
    }
}

/// Uniformly distributed point in a disk of `radius` around the origin.
fn random_in_disk(rng: &mut ChaCha8Rng, radius: f32) -> Vec2 {
    let r = radius * rng.gen::<f32>().sqrt();
    let theta = rng.gen_range(0.0..std::f32::consts::TAU);
    Vec2::new(r * theta.cos(), r * theta.sin())
}

fn camera() -> EntityRecord {
    let mut camera = record(
        "Main Camera",
        Role::Camera,
        Transform::from_position(Vec3::from(CAMERA_SPAWN)),
    );
    camera.camera = Some(CameraComponent {
        fov_deg: 90.0,
        is_main: true,
    });
    camera
}

fn ground_plane() -> EntityRecord {
    let mut plane = record("Plane", Role::Scenery, Transform::default());
    plane.render = Some(RenderComponent {
        mesh: MESH_TILED_PLANE.to_string(),
        material: MAT_BOX.to_string(),
    });
    plane.rigid_body = Some(RigidBody {
        kind: RigidBodyKind::Static,
        colliders: vec![Collider::Box {
            half_extents: Vec3::new(50.0, 50.0, 1.0),
            offset: Vec3::new(0.0, 0.0, -1.0),
        }],
        linear_damping: 0.0,
    });
    plane
}

fn player() -> EntityRecord {
    let transform = Transform::from_position(Vec3::from(PLAYER_SPAWN))
        .with_rotation(Vec3::new(0.0, 0.0, FACING_UP_DEG));
    let mut player = record("Player", Role::Player, transform);
    player.behaviour = Some(ScriptedBehaviour::player().to_record());
    player.render = monkey_render();
    let mut body = box_body(RigidBodyKind::Dynamic, Vec3::ONE);
    body.linear_damping = 500.0;
    player.rigid_body = Some(body);
    player.light = point_light(GREEN, 5.0);
    player
}

fn bolt() -> EntityRecord {
    let transform = Transform::from_position(Vec3::from(PLAYER_SPAWN))
        .with_rotation(Vec3::new(0.0, 0.0, FACING_UP_DEG))
        .with_scale(Vec3::splat(BOLT_IDLE_SCALE));
    let mut bolt = record("bolt", Role::Projectile, transform);
    bolt.behaviour = Some(ScriptedBehaviour::bolt().to_record());
    bolt.render = monkey_render();
    bolt.light = point_light(GREEN, 2.0);
    bolt
}

fn wall(name: &str, x: f32) -> EntityRecord {
    let position = Vec3::new(x, PLAYER_SPAWN[1], PLAYER_SPAWN[2]);
    let mut wall = record(name, Role::Wall, Transform::from_position(position));
    wall.rigid_body = Some(box_body(RigidBodyKind::Static, Vec3::splat(2.0)));
    wall
}

/// Three rows of five enemies, front row first.
fn spawn_enemy_formation(entities: &mut Vec<EntityRecord>) {
    for (row, y) in ENEMY_ROWS.iter().enumerate() {
        for (column, x) in ENEMY_COLUMNS.iter().enumerate() {
            let transform = Transform::from_position(Vec3::new(*x, *y, 1.0))
                .with_rotation(Vec3::new(0.0, 0.0, 90.0));
            let name = format!("enemy{}{}", column + 1, row + 1);
            let mut enemy = record(&name, Role::Enemy, transform);
            enemy.behaviour = Some(ScriptedBehaviour::enemy().to_record());
            enemy.render = monkey_render();
            enemy.light = point_light(RED, 5.0);
            entities.push(enemy);
        }
    }
}

fn top_ship() -> EntityRecord {
    let transform = Transform::from_position(Vec3::from(TOP_SHIP_SPAWN))
        .with_rotation(Vec3::new(0.0, 0.0, 90.0));
    let mut ship = record("topShip", Role::Enemy, transform);
    ship.behaviour = Some(ScriptedBehaviour::top_enemy().to_record());
    ship.render = monkey_render();
    ship.light = Some(LightComponent {
        color: AMBER,
        radius: 5.0,
        intensity: 2.0,
    });
    ship
}
