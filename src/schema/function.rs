//! Function node attribute tables.
//!
//! Function nodes are shared by geometry and shader trees.

use super::SettingKind::*;
use super::{attr, NodeSpec};
use crate::version::{V4_3, V4_4, V4_5, V5_0};

pub(super) static NODES: &[NodeSpec] = &[
    NodeSpec::new(
        "FunctionNodeAlignEulerToVector",
        &[
            attr("axis", Enum),
            attr("pivot_axis", Enum),
        ],
    ),
    NodeSpec::new(
        "FunctionNodeAlignRotationToVector",
        &[
            attr("axis", Enum),
            attr("pivot_axis", Enum),
        ],
    ),
    NodeSpec::new(
        "FunctionNodeAxesToRotation",
        &[
            attr("primary_axis", Enum),
            attr("secondary_axis", Enum),
        ],
    ),
    NodeSpec::new("FunctionNodeAxisAngleToRotation", &[]),
    NodeSpec::new("FunctionNodeBitMath", &[attr("operation", Enum)]).since(V4_5),
    NodeSpec::new("FunctionNodeBooleanMath", &[attr("operation", Enum)]),
    NodeSpec::new("FunctionNodeCombineColor", &[attr("mode", Enum)]),
    NodeSpec::new("FunctionNodeCombineMatrix", &[]),
    NodeSpec::new("FunctionNodeCombineTransform", &[]),
    NodeSpec::new(
        "FunctionNodeCompare",
        &[
            attr("data_type", Enum),
            attr("mode", Enum),
            attr("operation", Enum),
        ],
    ),
    NodeSpec::new("FunctionNodeEulerToRotation", &[]),
    NodeSpec::new("FunctionNodeFindInString", &[]).since(V4_4),
    NodeSpec::new("FunctionNodeFloatToInt", &[attr("rounding_mode", Enum)]),
    NodeSpec::new(
        "FunctionNodeFormatString",
        &[
            attr("active_index", Int),
            attr("format_items", FormatStringItems),
        ],
    ).since(V4_5),
    NodeSpec::new("FunctionNodeHashValue", &[attr("data_type", Enum)]).since(V4_3),
    NodeSpec::new("FunctionNodeInputBool", &[attr("boolean", Bool)]),
    NodeSpec::new("FunctionNodeInputColor", &[attr("value", Vec4)]),
    NodeSpec::new("FunctionNodeInputInt", &[attr("integer", Int)]),
    NodeSpec::new("FunctionNodeInputRotation", &[attr("rotation_euler", Euler)]),
    NodeSpec::new("FunctionNodeInputSpecialCharacters", &[]),
    NodeSpec::new("FunctionNodeInputString", &[attr("string", String)]),
    NodeSpec::new("FunctionNodeInputVector", &[attr("vector", Vec3)]),
    NodeSpec::new("FunctionNodeIntegerMath", &[attr("operation", Enum)]).since(V4_3),
    NodeSpec::new("FunctionNodeInvertMatrix", &[]),
    NodeSpec::new("FunctionNodeInvertRotation", &[]),
    NodeSpec::new("FunctionNodeMatchString", &[attr("operation", Enum).until(V5_0)]).since(V4_5),
    NodeSpec::new("FunctionNodeMatrixDeterminant", &[]).since(V4_3),
    NodeSpec::new("FunctionNodeMatrixMultiply", &[]),
    NodeSpec::new("FunctionNodeProjectPoint", &[]),
    NodeSpec::new("FunctionNodeQuaternionToRotation", &[]),
    NodeSpec::new("FunctionNodeRandomValue", &[attr("data_type", Enum)]),
    NodeSpec::new("FunctionNodeReplaceString", &[]),
    NodeSpec::new(
        "FunctionNodeRotateEuler",
        &[
            attr("rotation_type", Enum),
            attr("space", Enum),
        ],
    ),
    NodeSpec::new("FunctionNodeRotateRotation", &[attr("rotation_space", Enum)]),
    NodeSpec::new("FunctionNodeRotateVector", &[]),
    NodeSpec::new("FunctionNodeRotationToAxisAngle", &[]),
    NodeSpec::new("FunctionNodeRotationToEuler", &[]),
    NodeSpec::new("FunctionNodeRotationToQuaternion", &[]),
    NodeSpec::new("FunctionNodeSeparateColor", &[attr("mode", Enum)]),
    NodeSpec::new("FunctionNodeSeparateMatrix", &[]),
    NodeSpec::new("FunctionNodeSeparateTransform", &[]),
    NodeSpec::new("FunctionNodeSliceString", &[]),
    NodeSpec::new("FunctionNodeStringLength", &[]),
    NodeSpec::new("FunctionNodeStringToValue", &[attr("data_type", Enum)]).since(V5_0),
    NodeSpec::new("FunctionNodeTransformDirection", &[]),
    NodeSpec::new("FunctionNodeTransformPoint", &[]),
    NodeSpec::new("FunctionNodeTransposeMatrix", &[]),
    NodeSpec::new("FunctionNodeValueToString", &[attr("data_type", Enum).since(V4_3)]),
];
