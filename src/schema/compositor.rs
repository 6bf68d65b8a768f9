//! Compositor node attribute tables.

use super::SettingKind::*;
use super::{attr, NodeSpec};
use crate::version::{V4_3, V4_4, V4_5, V5_0};

pub(super) static NODES: &[NodeSpec] = &[
    NodeSpec::new(
        "CompositorNodeAlphaOver",
        &[
            attr("premul", Float).until(V4_5),
            attr("use_premultiply", Bool).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeAntiAliasing",
        &[
            attr("contrast_limit", Float).until(V4_5),
            attr("corner_rounding", Float).until(V4_5),
            attr("threshold", Float).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeBilateralblur",
        &[
            attr("iterations", Int).until(V4_5),
            attr("sigma_color", Float).until(V4_5),
            attr("sigma_space", Float).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeBlur",
        &[
            attr("aspect_correction", Enum).until(V4_5),
            attr("factor", Float).until(V4_5),
            attr("factor_x", Float).until(V4_5),
            attr("factor_y", Float).until(V4_5),
            attr("filter_type", Enum).until(V5_0),
            attr("size_x", Int).until(V4_5),
            attr("size_y", Int).until(V4_5),
            attr("use_bokeh", Bool).until(V4_5),
            attr("use_extended_bounds", Bool).until(V4_5),
            attr("use_gamma_correction", Bool).until(V4_5),
            attr("use_relative", Bool).until(V4_5),
            attr("use_variable_size", Bool).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeBokehBlur",
        &[
            attr("blur_max", Float).until(V4_5),
            attr("use_extended_bounds", Bool).until(V4_5),
            attr("use_variable_size", Bool).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeBokehImage",
        &[
            attr("angle", Float).until(V4_5),
            attr("catadioptric", Float).until(V4_5),
            attr("flaps", Int).until(V4_5),
            attr("rounding", Float).until(V4_5),
            attr("shift", Float).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeBoxMask",
        &[
            attr("mask_height", Float).until(V4_5),
            attr("mask_type", Enum).until(V5_0),
            attr("mask_width", Float).until(V4_5),
            attr("rotation", Float).until(V4_5),
            attr("x", Float).until(V4_5),
            attr("y", Float).until(V4_5),
        ],
    ),
    NodeSpec::new("CompositorNodeBrightContrast", &[attr("use_premultiply", Bool).until(V4_5)]),
    NodeSpec::new(
        "CompositorNodeChannelMatte",
        &[
            attr("color_space", Enum).until(V5_0),
            attr("limit_channel", Enum).until(V5_0),
            attr("limit_max", Float).until(V4_5),
            attr("limit_method", Enum).until(V5_0),
            attr("limit_min", Float).until(V4_5),
            attr("matte_channel", Enum).until(V5_0),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeChromaMatte",
        &[
            attr("gain", Float).until(V4_5),
            attr("lift", Float).until(V4_5),
            attr("shadow_adjust", Float).until(V4_5),
            attr("threshold", Float).until(V4_5),
            attr("tolerance", Float).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeColorBalance",
        &[
            attr("correction_method", Enum).until(V5_0),
            attr("gain", Color).until(V4_5),
            attr("gamma", Color).until(V4_5),
            attr("input_temperature", Float).since(V4_3).until(V4_5),
            attr("input_tint", Float).since(V4_3).until(V4_5),
            attr("input_whitepoint", Color).since(V4_3),
            attr("lift", Color).until(V4_5),
            attr("offset", Color).until(V4_5),
            attr("offset_basis", Float).until(V4_5),
            attr("output_temperature", Float).since(V4_3).until(V4_5),
            attr("output_tint", Float).since(V4_3).until(V4_5),
            attr("output_whitepoint", Color).since(V4_3),
            attr("power", Color).until(V4_5),
            attr("slope", Color).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeColorCorrection",
        &[
            attr("blue", Bool).until(V4_5),
            attr("green", Bool).until(V4_5),
            attr("highlights_contrast", Float).until(V4_5),
            attr("highlights_gain", Float).until(V4_5),
            attr("highlights_gamma", Float).until(V4_5),
            attr("highlights_lift", Float).until(V4_5),
            attr("highlights_saturation", Float).until(V4_5),
            attr("master_contrast", Float).until(V4_5),
            attr("master_gain", Float).until(V4_5),
            attr("master_gamma", Float).until(V4_5),
            attr("master_lift", Float).until(V4_5),
            attr("master_saturation", Float).until(V4_5),
            attr("midtones_contrast", Float).until(V4_5),
            attr("midtones_end", Float).until(V4_5),
            attr("midtones_gain", Float).until(V4_5),
            attr("midtones_gamma", Float).until(V4_5),
            attr("midtones_lift", Float).until(V4_5),
            attr("midtones_saturation", Float).until(V4_5),
            attr("midtones_start", Float).until(V4_5),
            attr("red", Bool).until(V4_5),
            attr("shadows_contrast", Float).until(V4_5),
            attr("shadows_gain", Float).until(V4_5),
            attr("shadows_gamma", Float).until(V4_5),
            attr("shadows_lift", Float).until(V4_5),
            attr("shadows_saturation", Float).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeColorMatte",
        &[
            attr("color_hue", Float).until(V4_5),
            attr("color_saturation", Float).until(V4_5),
            attr("color_value", Float).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeColorSpill",
        &[
            attr("channel", Enum).until(V5_0),
            attr("limit_channel", Enum).until(V5_0),
            attr("limit_method", Enum).until(V5_0),
            attr("ratio", Float).until(V4_5),
            attr("unspill_blue", Float).until(V4_5),
            attr("unspill_green", Float).until(V4_5),
            attr("unspill_red", Float).until(V4_5),
            attr("use_unspill", Bool).until(V4_5),
        ],
    ),
    NodeSpec::new("CompositorNodeCombHSVA", &[]).until(V5_0),
    NodeSpec::new("CompositorNodeCombRGBA", &[]).until(V5_0),
    NodeSpec::new("CompositorNodeCombYCCA", &[attr("mode", Enum)]).until(V5_0),
    NodeSpec::new("CompositorNodeCombYUVA", &[]).until(V5_0),
    NodeSpec::new(
        "CompositorNodeCombineColor",
        &[
            attr("mode", Enum),
            attr("ycc_mode", Enum),
        ],
    ),
    NodeSpec::new("CompositorNodeCombineXYZ", &[]).until(V5_0),
    NodeSpec::new("CompositorNodeComposite", &[attr("use_alpha", Bool).until(V4_5)]).until(V5_0),
    NodeSpec::new(
        "CompositorNodeConvertColorSpace",
        &[
            attr("from_color_space", Enum),
            attr("to_color_space", Enum),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeConvertToDisplay",
        &[
            attr("display_settings", ColorManagedDisplaySettings),
            attr("view_settings", ColorManagedViewSettings),
        ],
    ).since(V5_0),
    NodeSpec::new("CompositorNodeConvolve", &[]).since(V5_0),
    NodeSpec::new(
        "CompositorNodeCornerPin",
        &[
            attr("interpolation", Enum).since(V4_5).until(V5_0),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeCrop",
        &[
            attr("max_x", Int).until(V4_5),
            attr("max_y", Int).until(V4_5),
            attr("min_x", Int).until(V4_5),
            attr("min_y", Int).until(V4_5),
            attr("rel_max_x", Float).until(V4_5),
            attr("rel_max_y", Float).until(V4_5),
            attr("rel_min_x", Float).until(V4_5),
            attr("rel_min_y", Float).until(V4_5),
            attr("relative", Bool).until(V4_5),
            attr("use_crop_size", Bool).until(V5_0),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeCryptomatte",
        &[
            attr("add", Color),
            attr("matte_id", String),
            attr("remove", Color),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeCryptomatteV2",
        &[
            attr("add", Color),
            attr("entries", CryptomatteEntries),
            attr("frame_duration", Int),
            attr("frame_offset", Int),
            attr("frame_start", Int),
            attr("image", Image),
            attr("layer", Enum),
            attr("layer_name", Enum),
            attr("matte_id", String),
            attr("remove", Color),
            attr("scene", Scene),
            attr("source", Enum),
            attr("use_auto_refresh", Bool),
            attr("use_cyclic", Bool),
            attr("view", Enum),
        ],
    ),
    NodeSpec::new("CompositorNodeCurveRGB", &[attr("mapping", CurveMapping)]),
    NodeSpec::new("CompositorNodeCurveVec", &[attr("mapping", CurveMapping)]).until(V5_0),
    NodeSpec::new("CompositorNodeCustomGroup", &[attr("node_tree", NodeTree)]),
    NodeSpec::new(
        "CompositorNodeDBlur",
        &[
            attr("angle", Float).until(V4_5),
            attr("center_x", Float).until(V4_5),
            attr("center_y", Float).until(V4_5),
            attr("distance", Float).until(V4_5),
            attr("iterations", Int).until(V4_5),
            attr("spin", Float).until(V4_5),
            attr("zoom", Float).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeDefocus",
        &[
            attr("angle", Float),
            attr("blur_max", Float),
            attr("bokeh", Enum),
            attr("f_stop", Float),
            attr("scene", Scene),
            attr("threshold", Float).until(V4_5),
            attr("use_gamma_correction", Bool).until(V4_5),
            attr("use_preview", Bool).until(V4_5),
            attr("use_zbuffer", Bool),
            attr("z_scale", Float),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeDenoise",
        &[
            attr("prefilter", Enum).until(V5_0),
            attr("quality", Enum).since(V4_4).until(V5_0),
            attr("use_hdr", Bool).until(V5_0),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeDespeckle",
        &[
            attr("threshold", Float).until(V4_5),
            attr("threshold_neighbor", Float).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeDiffMatte",
        &[
            attr("falloff", Float).until(V4_5),
            attr("tolerance", Float).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeDilateErode",
        &[
            attr("distance", Int).until(V4_5),
            attr("edge", Float).until(V4_5),
            attr("falloff", Enum).until(V5_0),
            attr("mode", Enum).until(V5_0),
        ],
    ),
    NodeSpec::new("CompositorNodeDisplace", &[]),
    NodeSpec::new(
        "CompositorNodeDistanceMatte",
        &[
            attr("channel", Enum).until(V5_0),
            attr("falloff", Float).until(V4_5),
            attr("tolerance", Float).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeDoubleEdgeMask",
        &[
            attr("edge_mode", Enum).until(V5_0),
            attr("inner_mode", Enum).until(V5_0),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeEllipseMask",
        &[
            attr("mask_height", Float).until(V4_5),
            attr("mask_type", Enum).until(V5_0),
            attr("mask_width", Float).until(V4_5),
            attr("rotation", Float).until(V4_5),
            attr("x", Float).until(V4_5),
            attr("y", Float).until(V4_5),
        ],
    ),
    NodeSpec::new("CompositorNodeExposure", &[]),
    NodeSpec::new("CompositorNodeFilter", &[attr("filter_type", Enum).until(V5_0)]),
    NodeSpec::new("CompositorNodeFlip", &[attr("axis", Enum).until(V4_5)]),
    NodeSpec::new("CompositorNodeGamma", &[]),
    NodeSpec::new(
        "CompositorNodeGlare",
        &[
            attr("angle_offset", Float).until(V4_4),
            attr("color_modulation", Float).until(V4_4),
            attr("fade", Float).until(V4_4),
            attr("glare_type", Enum).until(V5_0),
            attr("iterations", Int).until(V4_4),
            attr("mix", Float).until(V4_4),
            attr("quality", Enum).until(V5_0),
            attr("size", Int).until(V4_4),
            attr("streaks", Int).until(V4_4),
            attr("threshold", Float).until(V4_4),
            attr("use_rotate_45", Bool).until(V4_5),
        ],
    ),
    NodeSpec::new("CompositorNodeGroup", &[attr("node_tree", NodeTree)]),
    NodeSpec::new("CompositorNodeHueCorrect", &[attr("mapping", CurveMapping)]),
    NodeSpec::new("CompositorNodeHueSat", &[]),
    NodeSpec::new(
        "CompositorNodeIDMask",
        &[
            attr("index", Int).until(V4_5),
            attr("use_antialiasing", Bool).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeImage",
        &[
            attr("frame_duration", Int),
            attr("frame_offset", Int),
            attr("frame_start", Int),
            attr("image", Image),
            attr("layer", Enum),
            attr("use_auto_refresh", Bool),
            attr("use_cyclic", Bool),
            attr("use_straight_alpha_output", Bool).until(V5_0),
            attr("view", Enum),
        ],
    ),
    NodeSpec::new("CompositorNodeImageCoordinates", &[]).since(V4_5),
    NodeSpec::new("CompositorNodeImageInfo", &[]).since(V4_5),
    NodeSpec::new("CompositorNodeInpaint", &[attr("distance", Int).until(V4_5)]),
    NodeSpec::new(
        "CompositorNodeInvert",
        &[
            attr("invert_alpha", Bool).until(V4_5),
            attr("invert_rgb", Bool).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeKeying",
        &[
            attr("blur_post", Int).until(V4_5),
            attr("blur_pre", Int).until(V4_5),
            attr("clip_black", Float).until(V4_5),
            attr("clip_white", Float).until(V4_5),
            attr("despill_balance", Float).until(V4_5),
            attr("despill_factor", Float).until(V4_5),
            attr("dilate_distance", Int).until(V4_5),
            attr("edge_kernel_radius", Int).until(V4_5),
            attr("edge_kernel_tolerance", Float).until(V4_5),
            attr("feather_distance", Int).until(V4_5),
            attr("feather_falloff", Enum).until(V5_0),
            attr("screen_balance", Float).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeKeyingScreen",
        &[
            attr("clip", MovieClip),
            attr("smoothness", Float).until(V4_5),
            attr("tracking_object", String),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeKuwahara",
        &[
            attr("eccentricity", Float).until(V4_5),
            attr("sharpness", Float).until(V4_5),
            attr("uniformity", Int).until(V4_5),
            attr("use_high_precision", Bool).until(V4_5),
            attr("variation", Enum).until(V5_0),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeLensdist",
        &[
            attr("distortion_type", Enum).since(V4_5).until(V5_0),
            attr("use_fit", Bool).until(V4_5),
            attr("use_jitter", Bool).until(V4_5),
            attr("use_projector", Bool).until(V4_5),
        ],
    ),
    NodeSpec::new("CompositorNodeLevels", &[attr("channel", Enum).until(V5_0)]),
    NodeSpec::new(
        "CompositorNodeLumaMatte",
        &[
            attr("limit_max", Float).until(V5_0),
            attr("limit_min", Float).until(V5_0),
        ],
    ),
    NodeSpec::new("CompositorNodeMapRange", &[attr("use_clamp", Bool)]).until(V5_0),
    NodeSpec::new(
        "CompositorNodeMapUV",
        &[
            attr("alpha", Int).until(V4_5),
            attr("filter_type", Enum).until(V5_0),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeMapValue",
        &[
            attr("max", Vec1),
            attr("min", Vec1),
            attr("offset", Vec1),
            attr("size", Vec1),
            attr("use_max", Bool),
            attr("use_min", Bool),
        ],
    ).until(V5_0),
    NodeSpec::new(
        "CompositorNodeMask",
        &[
            attr("mask", Mask),
            attr("motion_blur_samples", Int).until(V4_5),
            attr("motion_blur_shutter", Float).until(V4_5),
            attr("size_source", Enum).until(V5_0),
            attr("size_x", Int).until(V4_5),
            attr("size_y", Int).until(V4_5),
            attr("use_feather", Bool).until(V4_5),
            attr("use_motion_blur", Bool).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeMath",
        &[
            attr("operation", Enum),
            attr("use_clamp", Bool),
        ],
    ).until(V5_0),
    NodeSpec::new(
        "CompositorNodeMixRGB",
        &[
            attr("blend_type", Enum),
            attr("use_alpha", Bool),
            attr("use_clamp", Bool),
        ],
    ).until(V5_0),
    NodeSpec::new("CompositorNodeMovieClip", &[attr("clip", MovieClip)]),
    NodeSpec::new(
        "CompositorNodeMovieDistortion",
        &[
            attr("clip", MovieClip),
            attr("distortion_type", Enum).until(V5_0),
        ],
    ),
    NodeSpec::new("CompositorNodeNormal", &[]),
    NodeSpec::new("CompositorNodeNormalize", &[]),
    NodeSpec::new(
        "CompositorNodeOutputFile",
        &[
            attr("active_input_index", Int).until(V5_0),
            attr("active_item_index", Int).since(V5_0),
            attr("base_path", String).until(V5_0),
            attr("directory", String).since(V5_0),
            attr("file_name", String).since(V5_0),
            attr("file_output_items", CompositorFileOutputItems).since(V5_0),
            attr("file_slots", FileSlots).until(V5_0),
            attr("format", ImageFormatSettings),
            attr("layer_slots", LayerSlots).until(V5_0),
            attr("save_as_render", Bool).since(V4_3),
        ],
    ),
    NodeSpec::new("CompositorNodePixelate", &[attr("pixel_size", Int).until(V4_5)]),
    NodeSpec::new(
        "CompositorNodePlaneTrackDeform",
        &[
            attr("clip", MovieClip),
            attr("motion_blur_samples", Int).until(V4_5),
            attr("motion_blur_shutter", Float).until(V4_5),
            attr("plane_track_name", String),
            attr("tracking_object", String),
            attr("use_motion_blur", Bool).until(V4_5),
        ],
    ),
    NodeSpec::new("CompositorNodePosterize", &[]),
    NodeSpec::new("CompositorNodePremulKey", &[attr("mapping", Enum).until(V5_0)]),
    NodeSpec::new("CompositorNodeRGB", &[]),
    NodeSpec::new("CompositorNodeRGBToBW", &[]),
    NodeSpec::new(
        "CompositorNodeRLayers",
        &[
            attr("layer", Enum),
            attr("scene", Scene),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeRelativeToPixel",
        &[
            attr("data_type", Enum),
            attr("reference_dimension", Enum),
        ],
    ).since(V4_5),
    NodeSpec::new("CompositorNodeRotate", &[attr("filter_type", Enum).until(V5_0)]),
    NodeSpec::new(
        "CompositorNodeScale",
        &[
            attr("frame_method", Enum).until(V5_0),
            attr("interpolation", Enum).since(V4_5).until(V5_0),
            attr("offset_x", Float).until(V4_5),
            attr("offset_y", Float).until(V4_5),
            attr("space", Enum).until(V5_0),
        ],
    ),
    NodeSpec::new("CompositorNodeSceneTime", &[]),
    NodeSpec::new("CompositorNodeSepHSVA", &[]).until(V5_0),
    NodeSpec::new("CompositorNodeSepRGBA", &[]).until(V5_0),
    NodeSpec::new("CompositorNodeSepYCCA", &[attr("mode", Enum)]).until(V5_0),
    NodeSpec::new("CompositorNodeSepYUVA", &[]).until(V5_0),
    NodeSpec::new(
        "CompositorNodeSeparateColor",
        &[
            attr("mode", Enum),
            attr("ycc_mode", Enum),
        ],
    ),
    NodeSpec::new("CompositorNodeSeparateXYZ", &[]).until(V5_0),
    NodeSpec::new("CompositorNodeSetAlpha", &[attr("mode", Enum).until(V5_0)]),
    NodeSpec::new(
        "CompositorNodeSplit",
        &[
            attr("axis", Enum).until(V5_0),
            attr("factor", Int).until(V5_0),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeStabilize",
        &[
            attr("clip", MovieClip),
            attr("filter_type", Enum).until(V5_0),
            attr("invert", Bool).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeSunBeams",
        &[
            attr("ray_length", Float).until(V4_5),
            attr("source", Vec2).until(V4_5),
        ],
    ).until(V5_0),
    NodeSpec::new("CompositorNodeSwitch", &[attr("check", Bool).until(V4_5)]),
    NodeSpec::new("CompositorNodeSwitchView", &[]),
    NodeSpec::new(
        "CompositorNodeTexture",
        &[
            attr("node_output", Int),
            attr("texture", Texture),
        ],
    ).until(V5_0),
    NodeSpec::new(
        "CompositorNodeTime",
        &[
            attr("curve", CurveMapping),
            attr("frame_end", Int).until(V5_0),
            attr("frame_start", Int).until(V5_0),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeTonemap",
        &[
            attr("adaptation", Float).until(V4_5),
            attr("contrast", Float).until(V4_5),
            attr("correction", Float).until(V4_5),
            attr("gamma", Float).until(V4_5),
            attr("intensity", Float).until(V4_5),
            attr("key", Float).until(V4_5),
            attr("offset", Float).until(V4_5),
            attr("tonemap_type", Enum).until(V5_0),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeTrackPos",
        &[
            attr("clip", MovieClip),
            attr("frame_relative", Int).until(V5_0),
            attr("position", Enum).until(V5_0),
            attr("track_name", String),
            attr("tracking_object", String),
        ],
    ),
    NodeSpec::new("CompositorNodeTransform", &[attr("filter_type", Enum).until(V5_0)]),
    NodeSpec::new(
        "CompositorNodeTranslate",
        &[
            attr("interpolation", Enum).until(V5_0),
            attr("use_relative", Bool).until(V4_5),
            attr("wrap_axis", Enum).until(V5_0),
        ],
    ),
    NodeSpec::new("CompositorNodeValToRGB", &[attr("color_ramp", ColorRamp)]).until(V5_0),
    NodeSpec::new("CompositorNodeValue", &[]).until(V5_0),
    NodeSpec::new(
        "CompositorNodeVecBlur",
        &[
            attr("factor", Float).until(V4_5),
            attr("samples", Int).until(V4_5),
            attr("speed_max", Int).until(V4_5),
            attr("speed_min", Int).until(V4_5),
            attr("use_curved", Bool).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeViewer",
        &[
            attr("ui_shortcut", Int).since(V4_4),
            attr("use_alpha", Bool).until(V4_5),
        ],
    ),
    NodeSpec::new(
        "CompositorNodeZcombine",
        &[
            attr("use_alpha", Bool).until(V4_5),
            attr("use_antialias_z", Bool).until(V4_5),
        ],
    ),
];
