//! Attribute tables for node categories available in every tree type
//! (frames, reroutes, group sockets, closures and bundles).

use super::SettingKind::*;
use super::{attr, NodeSpec};
use crate::version::{V4_3, V5_0};

pub(super) static NODES: &[NodeSpec] = &[
    NodeSpec::new("NodeClosureInput", &[]).since(V5_0),
    NodeSpec::new(
        "NodeClosureOutput",
        &[
            attr("active_input_index", Int),
            attr("active_output_index", Int),
            attr("define_signature", Bool),
            attr("input_items", ClosureInputItems),
            attr("output_items", ClosureOutputItems),
        ],
    ).since(V5_0),
    NodeSpec::new(
        "NodeCombineBundle",
        &[
            attr("active_index", Int),
            attr("bundle_items", CombineBundleItems),
            attr("define_signature", Bool),
        ],
    ).since(V5_0),
    NodeSpec::new("NodeEnableOutput", &[attr("data_type", Enum)]).since(V5_0),
    NodeSpec::new(
        "NodeEvaluateClosure",
        &[
            attr("active_input_index", Int),
            attr("active_output_index", Int),
            attr("define_signature", Bool),
            attr("input_items", EvaluateClosureOutputItems),
            attr("output_items", EvaluateClosureOutputItems),
        ],
    ).since(V5_0),
    NodeSpec::new(
        "NodeFrame",
        &[
            attr("label_size", Int),
            attr("shrink", Bool),
            attr("text", Text),
        ],
    ),
    NodeSpec::new("NodeGroup", &[attr("node_tree", NodeTree)]),
    NodeSpec::new("NodeGroupInput", &[]),
    NodeSpec::new("NodeGroupOutput", &[attr("is_active_output", Bool)]),
    NodeSpec::new("NodeJoinBundle", &[]).since(V5_0),
    NodeSpec::new("NodeReroute", &[attr("socket_idname", String).since(V4_3)]),
    NodeSpec::new(
        "NodeSeparateBundle",
        &[
            attr("active_index", Int),
            attr("bundle_items", SeparateBundleItems),
            attr("define_signature", Bool),
        ],
    ).since(V5_0),
];
