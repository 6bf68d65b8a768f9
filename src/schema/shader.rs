//! Shader node attribute tables.

use super::SettingKind::*;
use super::{attr, NodeSpec};
use crate::version::{V4_3, V4_5, V5_0};

pub(super) static NODES: &[NodeSpec] = &[
    NodeSpec::new("ShaderNodeAddShader", &[]),
    NodeSpec::new(
        "ShaderNodeAmbientOcclusion",
        &[
            attr("inside", Bool),
            attr("only_local", Bool),
            attr("samples", Int),
        ],
    ),
    NodeSpec::new(
        "ShaderNodeAttribute",
        &[
            attr("attribute_name", String),
            attr("attribute_type", Enum),
        ],
    ),
    NodeSpec::new("ShaderNodeBackground", &[]),
    NodeSpec::new("ShaderNodeBevel", &[attr("samples", Int)]),
    NodeSpec::new("ShaderNodeBlackbody", &[]),
    NodeSpec::new("ShaderNodeBrightContrast", &[]),
    NodeSpec::new("ShaderNodeBsdfAnisotropic", &[attr("distribution", Enum)]),
    NodeSpec::new("ShaderNodeBsdfDiffuse", &[]),
    NodeSpec::new("ShaderNodeBsdfGlass", &[attr("distribution", Enum)]),
    NodeSpec::new("ShaderNodeBsdfHair", &[attr("component", Enum)]),
    NodeSpec::new(
        "ShaderNodeBsdfHairPrincipled",
        &[
            attr("model", Enum),
            attr("parametrization", Enum),
        ],
    ),
    NodeSpec::new(
        "ShaderNodeBsdfMetallic",
        &[
            attr("distribution", Enum),
            attr("fresnel_type", Enum),
        ],
    ).since(V4_3),
    NodeSpec::new(
        "ShaderNodeBsdfPrincipled",
        &[
            attr("distribution", Enum),
            attr("subsurface_method", Enum),
        ],
    ),
    NodeSpec::new("ShaderNodeBsdfRayPortal", &[]),
    NodeSpec::new("ShaderNodeBsdfRefraction", &[attr("distribution", Enum)]),
    NodeSpec::new("ShaderNodeBsdfSheen", &[attr("distribution", Enum)]),
    NodeSpec::new("ShaderNodeBsdfToon", &[attr("component", Enum)]),
    NodeSpec::new("ShaderNodeBsdfTranslucent", &[]),
    NodeSpec::new("ShaderNodeBsdfTransparent", &[]),
    NodeSpec::new("ShaderNodeBump", &[attr("invert", Bool)]),
    NodeSpec::new("ShaderNodeCameraData", &[]),
    NodeSpec::new("ShaderNodeClamp", &[attr("clamp_type", Enum)]),
    NodeSpec::new("ShaderNodeCombineColor", &[attr("mode", Enum)]),
    NodeSpec::new("ShaderNodeCombineHSV", &[]).until(V5_0),
    NodeSpec::new("ShaderNodeCombineRGB", &[]).until(V5_0),
    NodeSpec::new("ShaderNodeCombineXYZ", &[]),
    NodeSpec::new("ShaderNodeCustomGroup", &[attr("node_tree", NodeTree)]),
    NodeSpec::new("ShaderNodeDisplacement", &[attr("space", Enum)]),
    NodeSpec::new("ShaderNodeEeveeSpecular", &[]),
    NodeSpec::new("ShaderNodeEmission", &[]),
    NodeSpec::new("ShaderNodeFloatCurve", &[attr("mapping", CurveMapping)]),
    NodeSpec::new("ShaderNodeFresnel", &[]),
    NodeSpec::new("ShaderNodeGamma", &[]),
    NodeSpec::new("ShaderNodeGroup", &[attr("node_tree", NodeTree)]),
    NodeSpec::new("ShaderNodeHairInfo", &[]),
    NodeSpec::new("ShaderNodeHoldout", &[]),
    NodeSpec::new("ShaderNodeHueSaturation", &[]),
    NodeSpec::new("ShaderNodeInvert", &[]),
    NodeSpec::new("ShaderNodeLayerWeight", &[]),
    NodeSpec::new("ShaderNodeLightFalloff", &[]),
    NodeSpec::new("ShaderNodeLightPath", &[]),
    NodeSpec::new(
        "ShaderNodeMapRange",
        &[
            attr("clamp", Bool),
            attr("data_type", Enum),
            attr("interpolation_type", Enum),
        ],
    ),
    NodeSpec::new("ShaderNodeMapping", &[attr("vector_type", Enum)]),
    NodeSpec::new(
        "ShaderNodeMath",
        &[
            attr("operation", Enum),
            attr("use_clamp", Bool),
        ],
    ),
    NodeSpec::new(
        "ShaderNodeMix",
        &[
            attr("blend_type", Enum),
            attr("clamp_factor", Bool),
            attr("clamp_result", Bool),
            attr("data_type", Enum),
            attr("factor_mode", Enum),
        ],
    ),
    NodeSpec::new(
        "ShaderNodeMixRGB",
        &[
            attr("blend_type", Enum),
            attr("use_alpha", Bool),
            attr("use_clamp", Bool),
        ],
    ),
    NodeSpec::new("ShaderNodeMixShader", &[]),
    NodeSpec::new("ShaderNodeNewGeometry", &[]),
    NodeSpec::new("ShaderNodeNormal", &[]),
    NodeSpec::new(
        "ShaderNodeNormalMap",
        &[
            attr("space", Enum),
            attr("uv_map", String),
        ],
    ),
    NodeSpec::new("ShaderNodeObjectInfo", &[]),
    NodeSpec::new("ShaderNodeOutputAOV", &[attr("aov_name", String)]),
    NodeSpec::new(
        "ShaderNodeOutputLight",
        &[
            attr("is_active_output", Bool),
            attr("target", Enum),
        ],
    ),
    NodeSpec::new(
        "ShaderNodeOutputLineStyle",
        &[
            attr("blend_type", Enum),
            attr("is_active_output", Bool),
            attr("target", Enum),
            attr("use_alpha", Bool),
            attr("use_clamp", Bool),
        ],
    ),
    NodeSpec::new(
        "ShaderNodeOutputMaterial",
        &[
            attr("is_active_output", Bool),
            attr("target", Enum),
        ],
    ),
    NodeSpec::new(
        "ShaderNodeOutputWorld",
        &[
            attr("is_active_output", Bool),
            attr("target", Enum),
        ],
    ),
    NodeSpec::new("ShaderNodeParticleInfo", &[]),
    NodeSpec::new("ShaderNodePointInfo", &[]),
    NodeSpec::new("ShaderNodeRGB", &[]),
    NodeSpec::new("ShaderNodeRGBCurve", &[attr("mapping", CurveMapping)]),
    NodeSpec::new("ShaderNodeRGBToBW", &[]),
    NodeSpec::new("ShaderNodeRadialTiling", &[attr("normalize", Bool)]).since(V5_0),
    NodeSpec::new(
        "ShaderNodeScript",
        &[
            attr("bytecode", String),
            attr("bytecode_hash", String),
            attr("filepath", String),
            attr("mode", Enum),
            attr("script", Text),
            attr("use_auto_update", Bool),
        ],
    ),
    NodeSpec::new("ShaderNodeSeparateColor", &[attr("mode", Enum)]),
    NodeSpec::new("ShaderNodeSeparateHSV", &[]).until(V5_0),
    NodeSpec::new("ShaderNodeSeparateRGB", &[]).until(V5_0),
    NodeSpec::new("ShaderNodeSeparateXYZ", &[]),
    NodeSpec::new("ShaderNodeShaderToRGB", &[]),
    NodeSpec::new("ShaderNodeSqueeze", &[]),
    NodeSpec::new("ShaderNodeSubsurfaceScattering", &[attr("falloff", Enum)]),
    NodeSpec::new(
        "ShaderNodeTangent",
        &[
            attr("axis", Enum),
            attr("direction_type", Enum),
            attr("uv_map", String),
        ],
    ),
    NodeSpec::new(
        "ShaderNodeTexBrick",
        &[
            attr("offset", Float),
            attr("offset_frequency", Int),
            attr("squash", Float),
            attr("squash_frequency", Int),
        ],
    ),
    NodeSpec::new("ShaderNodeTexChecker", &[]),
    NodeSpec::new(
        "ShaderNodeTexCoord",
        &[
            attr("from_instancer", Bool),
            attr("object", Object),
        ],
    ),
    NodeSpec::new(
        "ShaderNodeTexEnvironment",
        &[
            attr("image", Image),
            attr("image_user", ImageUser),
            attr("interpolation", Enum),
            attr("projection", Enum),
        ],
    ),
    NodeSpec::new("ShaderNodeTexGabor", &[attr("gabor_type", Enum)]).since(V4_3),
    NodeSpec::new("ShaderNodeTexGradient", &[attr("gradient_type", Enum)]),
    NodeSpec::new(
        "ShaderNodeTexIES",
        &[
            attr("filepath", String),
            attr("ies", Text),
            attr("mode", Enum),
        ],
    ),
    NodeSpec::new(
        "ShaderNodeTexImage",
        &[
            attr("extension", Enum),
            attr("image", Image),
            attr("image_user", ImageUser),
            attr("interpolation", Enum),
            attr("projection", Enum),
            attr("projection_blend", Float),
        ],
    ),
    NodeSpec::new("ShaderNodeTexMagic", &[attr("turbulence_depth", Int)]),
    NodeSpec::new(
        "ShaderNodeTexNoise",
        &[
            attr("noise_dimensions", Enum),
            attr("noise_type", Enum),
            attr("normalize", Bool),
        ],
    ),
    NodeSpec::new(
        "ShaderNodeTexPointDensity",
        &[
            attr("interpolation", Enum),
            attr("object", Object),
            attr("particle_color_source", Enum),
            attr("particle_system", ParticleSystem),
            attr("point_source", Enum),
            attr("radius", Float),
            attr("resolution", Int),
            attr("space", Enum),
            attr("vertex_attribute_name", String),
            attr("vertex_color_source", Enum),
        ],
    ).until(V5_0),
    NodeSpec::new(
        "ShaderNodeTexSky",
        &[
            attr("aerosol_density", Float).since(V5_0),
            attr("air_density", Float),
            attr("altitude", Float),
            attr("dust_density", Float).until(V5_0),
            attr("ground_albedo", Float),
            attr("ozone_density", Float),
            attr("sky_type", Enum),
            attr("sun_direction", Vec3),
            attr("sun_disc", Bool),
            attr("sun_elevation", Float),
            attr("sun_intensity", Float),
            attr("sun_rotation", Float),
            attr("sun_size", Float),
            attr("turbidity", Float),
        ],
    ),
    NodeSpec::new(
        "ShaderNodeTexVoronoi",
        &[
            attr("distance", Enum),
            attr("feature", Enum),
            attr("normalize", Bool),
            attr("voronoi_dimensions", Enum),
        ],
    ),
    NodeSpec::new(
        "ShaderNodeTexWave",
        &[
            attr("bands_direction", Enum),
            attr("rings_direction", Enum),
            attr("wave_profile", Enum),
            attr("wave_type", Enum),
        ],
    ),
    NodeSpec::new("ShaderNodeTexWhiteNoise", &[attr("noise_dimensions", Enum)]),
    NodeSpec::new("ShaderNodeUVAlongStroke", &[attr("use_tips", Bool)]),
    NodeSpec::new(
        "ShaderNodeUVMap",
        &[
            attr("from_instancer", Bool),
            attr("uv_map", String),
        ],
    ),
    NodeSpec::new("ShaderNodeValToRGB", &[attr("color_ramp", ColorRamp)]),
    NodeSpec::new("ShaderNodeValue", &[]),
    NodeSpec::new("ShaderNodeVectorCurve", &[attr("mapping", CurveMapping)]),
    NodeSpec::new("ShaderNodeVectorDisplacement", &[attr("space", Enum)]),
    NodeSpec::new("ShaderNodeVectorMath", &[attr("operation", Enum)]),
    NodeSpec::new(
        "ShaderNodeVectorRotate",
        &[
            attr("invert", Bool),
            attr("rotation_type", Enum),
        ],
    ),
    NodeSpec::new(
        "ShaderNodeVectorTransform",
        &[
            attr("convert_from", Enum),
            attr("convert_to", Enum),
            attr("vector_type", Enum),
        ],
    ),
    NodeSpec::new("ShaderNodeVertexColor", &[attr("layer_name", String)]),
    NodeSpec::new("ShaderNodeVolumeAbsorption", &[]),
    NodeSpec::new("ShaderNodeVolumeCoefficients", &[attr("phase", Enum)]).since(V4_5),
    NodeSpec::new("ShaderNodeVolumeInfo", &[]),
    NodeSpec::new("ShaderNodeVolumePrincipled", &[]),
    NodeSpec::new("ShaderNodeVolumeScatter", &[attr("phase", Enum).since(V4_3)]),
    NodeSpec::new("ShaderNodeWavelength", &[]),
    NodeSpec::new("ShaderNodeWireframe", &[attr("use_pixel_size", Bool)]),
];
