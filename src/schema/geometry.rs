//! Geometry node attribute tables.

use super::SettingKind::*;
use super::{attr, NodeSpec};
use crate::version::{V4_3, V4_4, V4_5, V5_0};

pub(super) static NODES: &[NodeSpec] = &[
    NodeSpec::new(
        "GeometryNodeAccumulateField",
        &[
            attr("data_type", Enum),
            attr("domain", Enum),
        ],
    ),
    NodeSpec::new("GeometryNodeAttributeDomainSize", &[attr("component", Enum)]),
    NodeSpec::new(
        "GeometryNodeAttributeStatistic",
        &[
            attr("data_type", Enum),
            attr("domain", Enum),
        ],
    ),
    NodeSpec::new(
        "GeometryNodeBake",
        &[
            attr("active_index", Int),
            attr("bake_items", BakeItems),
        ],
    ),
    NodeSpec::new("GeometryNodeBlurAttribute", &[attr("data_type", Enum)]),
    NodeSpec::new("GeometryNodeBoundBox", &[]),
    NodeSpec::new("GeometryNodeCameraInfo", &[]).since(V4_5),
    NodeSpec::new(
        "GeometryNodeCaptureAttribute",
        &[
            attr("active_index", Int),
            attr("capture_items", CaptureAttributeItems),
            attr("domain", Enum),
        ],
    ),
    NodeSpec::new("GeometryNodeClosureInput", &[]).since(V4_5).until(V5_0),
    NodeSpec::new(
        "GeometryNodeClosureOutput",
        &[
            attr("active_input_index", Int),
            attr("active_output_index", Int),
        ],
    ).since(V4_5).until(V5_0),
    NodeSpec::new("GeometryNodeCollectionInfo", &[attr("transform_space", Enum)]),
    NodeSpec::new(
        "GeometryNodeCombineBundle",
        &[
            attr("active_index", Int),
        ],
    ).since(V4_5).until(V5_0),
    NodeSpec::new("GeometryNodeConvexHull", &[]),
    NodeSpec::new("GeometryNodeCornersOfEdge", &[]),
    NodeSpec::new("GeometryNodeCornersOfFace", &[]),
    NodeSpec::new("GeometryNodeCornersOfVertex", &[]),
    NodeSpec::new("GeometryNodeCurveArc", &[attr("mode", Enum)]),
    NodeSpec::new("GeometryNodeCurveEndpointSelection", &[]),
    NodeSpec::new(
        "GeometryNodeCurveHandleTypeSelection",
        &[
            attr("handle_type", Enum),
            attr("mode", EnumSet),
        ],
    ),
    NodeSpec::new("GeometryNodeCurveLength", &[]),
    NodeSpec::new("GeometryNodeCurveOfPoint", &[]),
    NodeSpec::new("GeometryNodeCurvePrimitiveBezierSegment", &[attr("mode", Enum)]),
    NodeSpec::new("GeometryNodeCurvePrimitiveCircle", &[attr("mode", Enum)]),
    NodeSpec::new("GeometryNodeCurvePrimitiveLine", &[attr("mode", Enum)]),
    NodeSpec::new("GeometryNodeCurvePrimitiveQuadrilateral", &[attr("mode", Enum)]),
    NodeSpec::new("GeometryNodeCurveQuadraticBezier", &[]),
    NodeSpec::new(
        "GeometryNodeCurveSetHandles",
        &[
            attr("handle_type", Enum),
            attr("mode", EnumSet),
        ],
    ),
    NodeSpec::new("GeometryNodeCurveSpiral", &[]),
    NodeSpec::new("GeometryNodeCurveSplineType", &[attr("spline_type", Enum)]),
    NodeSpec::new("GeometryNodeCurveStar", &[]),
    NodeSpec::new("GeometryNodeCurveToMesh", &[]),
    NodeSpec::new("GeometryNodeCurveToPoints", &[attr("mode", Enum)]),
    NodeSpec::new("GeometryNodeCurvesToGreasePencil", &[]).since(V4_3),
    NodeSpec::new("GeometryNodeCustomGroup", &[attr("node_tree", NodeTree)]),
    NodeSpec::new("GeometryNodeDeformCurvesOnSurface", &[]),
    NodeSpec::new(
        "GeometryNodeDeleteGeometry",
        &[
            attr("domain", Enum),
            attr("mode", Enum),
        ],
    ),
    NodeSpec::new("GeometryNodeDistributePointsInGrid", &[attr("mode", Enum)]),
    NodeSpec::new("GeometryNodeDistributePointsInVolume", &[attr("mode", Enum).until(V5_0)]),
    NodeSpec::new(
        "GeometryNodeDistributePointsOnFaces",
        &[
            attr("distribute_method", Enum),
            attr("use_legacy_normal", Bool),
        ],
    ),
    NodeSpec::new("GeometryNodeDualMesh", &[]),
    NodeSpec::new("GeometryNodeDuplicateElements", &[attr("domain", Enum)]),
    NodeSpec::new("GeometryNodeEdgePathsToCurves", &[]),
    NodeSpec::new("GeometryNodeEdgePathsToSelection", &[]),
    NodeSpec::new("GeometryNodeEdgesOfCorner", &[]),
    NodeSpec::new("GeometryNodeEdgesOfVertex", &[]),
    NodeSpec::new("GeometryNodeEdgesToFaceGroups", &[]),
    NodeSpec::new(
        "GeometryNodeEvaluateClosure",
        &[
            attr("active_input_index", Int),
            attr("active_output_index", Int),
        ],
    ).since(V4_5).until(V5_0),
    NodeSpec::new("GeometryNodeExtrudeMesh", &[attr("mode", Enum)]),
    NodeSpec::new("GeometryNodeFaceOfCorner", &[]),
    NodeSpec::new(
        "GeometryNodeFieldAtIndex",
        &[
            attr("data_type", Enum),
            attr("domain", Enum),
        ],
    ),
    NodeSpec::new(
        "GeometryNodeFieldAverage",
        &[
            attr("data_type", Enum),
            attr("domain", Enum),
        ],
    ).since(V4_5),
    NodeSpec::new(
        "GeometryNodeFieldMinAndMax",
        &[
            attr("data_type", Enum),
            attr("domain", Enum),
        ],
    ).since(V4_5),
    NodeSpec::new(
        "GeometryNodeFieldOnDomain",
        &[
            attr("data_type", Enum),
            attr("domain", Enum),
        ],
    ),
    NodeSpec::new(
        "GeometryNodeFieldToGrid",
        &[
            attr("active_index", Int),
            attr("data_type", Enum),
            attr("grid_items", FieldToGridItems),
        ],
    ).since(V5_0),
    NodeSpec::new(
        "GeometryNodeFieldVariance",
        &[
            attr("data_type", Enum),
            attr("domain", Enum),
        ],
    ).since(V4_5),
    NodeSpec::new("GeometryNodeFillCurve", &[attr("mode", Enum).until(V5_0)]),
    NodeSpec::new("GeometryNodeFilletCurve", &[attr("mode", Enum).until(V5_0)]),
    NodeSpec::new("GeometryNodeFlipFaces", &[]),
    NodeSpec::new("GeometryNodeForeachGeometryElementInput", &[]).since(V4_3),
    NodeSpec::new(
        "GeometryNodeForeachGeometryElementOutput",
        &[
            attr("active_generation_index", Int),
            attr("active_input_index", Int),
            attr("active_main_index", Int),
            attr("domain", Enum),
            attr("generation_items", ForeachGeoElementGenerationItems),
            attr("input_items", ForeachGeoElementInputItems),
            attr("inspection_index", Int),
            attr("main_items", ForeachGeoElementMainItems),
        ],
    ).since(V4_3),
    NodeSpec::new("GeometryNodeGeometryToInstance", &[]),
    NodeSpec::new("GeometryNodeGetNamedGrid", &[attr("data_type", Enum)]),
    NodeSpec::new("GeometryNodeGizmoDial", &[attr("color_id", Enum)]).since(V4_3),
    NodeSpec::new(
        "GeometryNodeGizmoLinear",
        &[
            attr("color_id", Enum),
            attr("draw_style", Enum),
        ],
    ).since(V4_3),
    NodeSpec::new(
        "GeometryNodeGizmoTransform",
        &[
            attr("use_rotation_x", Bool),
            attr("use_rotation_y", Bool),
            attr("use_rotation_z", Bool),
            attr("use_scale_x", Bool),
            attr("use_scale_y", Bool),
            attr("use_scale_z", Bool),
            attr("use_translation_x", Bool),
            attr("use_translation_y", Bool),
            attr("use_translation_z", Bool),
        ],
    ).since(V4_3),
    NodeSpec::new("GeometryNodeGreasePencilToCurves", &[]).since(V4_3),
    NodeSpec::new("GeometryNodeGridAdvect", &[attr("data_type", Enum)]).since(V5_0),
    NodeSpec::new("GeometryNodeGridCurl", &[]).since(V5_0),
    NodeSpec::new("GeometryNodeGridDivergence", &[]).since(V5_0),
    NodeSpec::new("GeometryNodeGridGradient", &[]).since(V5_0),
    NodeSpec::new("GeometryNodeGridInfo", &[attr("data_type", Enum)]).since(V4_5),
    NodeSpec::new("GeometryNodeGridLaplacian", &[]).since(V5_0),
    NodeSpec::new("GeometryNodeGridPrune", &[attr("data_type", Enum)]).since(V5_0),
    NodeSpec::new("GeometryNodeGridToMesh", &[]),
    NodeSpec::new("GeometryNodeGridVoxelize", &[attr("data_type", Enum)]).since(V5_0),
    NodeSpec::new("GeometryNodeGroup", &[attr("node_tree", NodeTree)]),
    NodeSpec::new("GeometryNodeImageInfo", &[]),
    NodeSpec::new(
        "GeometryNodeImageTexture",
        &[
            attr("extension", Enum),
            attr("interpolation", Enum),
        ],
    ),
    NodeSpec::new("GeometryNodeImportCSV", &[]).since(V4_5),
    NodeSpec::new("GeometryNodeImportOBJ", &[]).since(V4_3),
    NodeSpec::new("GeometryNodeImportPLY", &[]).since(V4_3),
    NodeSpec::new("GeometryNodeImportSTL", &[]).since(V4_3),
    NodeSpec::new("GeometryNodeImportText", &[]).since(V4_5),
    NodeSpec::new("GeometryNodeImportVDB", &[]).since(V4_5),
    NodeSpec::new("GeometryNodeIndexOfNearest", &[]),
    NodeSpec::new(
        "GeometryNodeIndexSwitch",
        &[
            attr("data_type", Enum),
            attr("index_switch_items", IndexSwitchItems),
        ],
    ),
    NodeSpec::new("GeometryNodeInputActiveCamera", &[]),
    NodeSpec::new("GeometryNodeInputCollection", &[attr("collection", Collection)]).since(V4_4),
    NodeSpec::new("GeometryNodeInputCurveHandlePositions", &[]),
    NodeSpec::new("GeometryNodeInputCurveTilt", &[]),
    NodeSpec::new("GeometryNodeInputEdgeSmooth", &[]),
    NodeSpec::new("GeometryNodeInputID", &[]),
    NodeSpec::new("GeometryNodeInputImage", &[attr("image", Image)]),
    NodeSpec::new("GeometryNodeInputIndex", &[]),
    NodeSpec::new("GeometryNodeInputInstanceBounds", &[]).since(V4_5),
    NodeSpec::new("GeometryNodeInputInstanceRotation", &[]),
    NodeSpec::new("GeometryNodeInputInstanceScale", &[]),
    NodeSpec::new("GeometryNodeInputMaterial", &[attr("material", Material)]),
    NodeSpec::new("GeometryNodeInputMaterialIndex", &[]),
    NodeSpec::new("GeometryNodeInputMeshEdgeAngle", &[]),
    NodeSpec::new("GeometryNodeInputMeshEdgeNeighbors", &[]),
    NodeSpec::new("GeometryNodeInputMeshEdgeVertices", &[]),
    NodeSpec::new("GeometryNodeInputMeshFaceArea", &[]),
    NodeSpec::new("GeometryNodeInputMeshFaceIsPlanar", &[]),
    NodeSpec::new("GeometryNodeInputMeshFaceNeighbors", &[]),
    NodeSpec::new("GeometryNodeInputMeshIsland", &[]),
    NodeSpec::new("GeometryNodeInputMeshVertexNeighbors", &[]),
    NodeSpec::new("GeometryNodeInputNamedAttribute", &[attr("data_type", Enum)]),
    NodeSpec::new("GeometryNodeInputNamedLayerSelection", &[]),
    NodeSpec::new("GeometryNodeInputNormal", &[attr("legacy_corner_normals", Bool).since(V4_4)]),
    NodeSpec::new("GeometryNodeInputObject", &[attr("object", Object)]).since(V4_4),
    NodeSpec::new("GeometryNodeInputPosition", &[]),
    NodeSpec::new("GeometryNodeInputRadius", &[]),
    NodeSpec::new("GeometryNodeInputSceneTime", &[]),
    NodeSpec::new("GeometryNodeInputShadeSmooth", &[]),
    NodeSpec::new("GeometryNodeInputShortestEdgePaths", &[]),
    NodeSpec::new("GeometryNodeInputSplineCyclic", &[]),
    NodeSpec::new("GeometryNodeInputSplineResolution", &[]),
    NodeSpec::new("GeometryNodeInputTangent", &[]),
    NodeSpec::new("GeometryNodeInputVoxelIndex", &[]).since(V5_0),
    NodeSpec::new("GeometryNodeInstanceOnPoints", &[]),
    NodeSpec::new("GeometryNodeInstanceTransform", &[]),
    NodeSpec::new("GeometryNodeInstancesToPoints", &[]),
    NodeSpec::new("GeometryNodeInterpolateCurves", &[]),
    NodeSpec::new("GeometryNodeIsViewport", &[]),
    NodeSpec::new("GeometryNodeJoinGeometry", &[]),
    NodeSpec::new("GeometryNodeList", &[attr("data_type", Enum)]).since(V5_0),
    NodeSpec::new("GeometryNodeListGetItem", &[attr("data_type", Enum)]).since(V5_0),
    NodeSpec::new("GeometryNodeListLength", &[attr("data_type", Enum)]).since(V5_0),
    NodeSpec::new("GeometryNodeMaterialSelection", &[]),
    NodeSpec::new(
        "GeometryNodeMenuSwitch",
        &[
            attr("active_index", Int),
            attr("active_item", EnumItem),
            attr("data_type", Enum),
            attr("enum_items", MenuSwitchItems),
        ],
    ),
    NodeSpec::new("GeometryNodeMergeByDistance", &[attr("mode", Enum).until(V5_0)]),
    NodeSpec::new("GeometryNodeMergeLayers", &[attr("mode", Enum)]).since(V4_3),
    NodeSpec::new(
        "GeometryNodeMeshBoolean",
        &[
            attr("operation", Enum),
            attr("solver", Enum),
        ],
    ),
    NodeSpec::new("GeometryNodeMeshCircle", &[attr("fill_type", Enum)]),
    NodeSpec::new("GeometryNodeMeshCone", &[attr("fill_type", Enum)]),
    NodeSpec::new("GeometryNodeMeshCube", &[]),
    NodeSpec::new("GeometryNodeMeshCylinder", &[attr("fill_type", Enum)]),
    NodeSpec::new("GeometryNodeMeshFaceSetBoundaries", &[]),
    NodeSpec::new("GeometryNodeMeshGrid", &[]),
    NodeSpec::new("GeometryNodeMeshIcoSphere", &[]),
    NodeSpec::new(
        "GeometryNodeMeshLine",
        &[
            attr("count_mode", Enum),
            attr("mode", Enum),
        ],
    ),
    NodeSpec::new("GeometryNodeMeshToCurve", &[attr("mode", Enum).since(V4_5)]),
    NodeSpec::new("GeometryNodeMeshToDensityGrid", &[]),
    NodeSpec::new("GeometryNodeMeshToPoints", &[attr("mode", Enum)]),
    NodeSpec::new("GeometryNodeMeshToSDFGrid", &[]),
    NodeSpec::new("GeometryNodeMeshToVolume", &[attr("resolution_mode", Enum).until(V5_0)]),
    NodeSpec::new("GeometryNodeMeshUVSphere", &[]),
    NodeSpec::new("GeometryNodeObjectInfo", &[attr("transform_space", Enum)]),
    NodeSpec::new("GeometryNodeOffsetCornerInFace", &[]),
    NodeSpec::new("GeometryNodeOffsetPointInCurve", &[]),
    NodeSpec::new("GeometryNodePoints", &[]),
    NodeSpec::new("GeometryNodePointsOfCurve", &[]),
    NodeSpec::new("GeometryNodePointsToCurves", &[]),
    NodeSpec::new("GeometryNodePointsToSDFGrid", &[]),
    NodeSpec::new("GeometryNodePointsToVertices", &[]),
    NodeSpec::new("GeometryNodePointsToVolume", &[attr("resolution_mode", Enum).until(V5_0)]),
    NodeSpec::new("GeometryNodeProximity", &[attr("target_element", Enum)]),
    NodeSpec::new(
        "GeometryNodeRaycast",
        &[
            attr("data_type", Enum),
            attr("mapping", Enum).until(V5_0),
        ],
    ),
    NodeSpec::new("GeometryNodeRealizeInstances", &[]),
    NodeSpec::new("GeometryNodeRemoveAttribute", &[attr("pattern_mode", Enum).until(V5_0)]),
    NodeSpec::new("GeometryNodeRepeatInput", &[]),
    NodeSpec::new(
        "GeometryNodeRepeatOutput",
        &[
            attr("active_index", Int),
            attr("inspection_index", Int),
            attr("repeat_items", RepeatOutputItems),
        ],
    ),
    NodeSpec::new("GeometryNodeReplaceMaterial", &[]),
    NodeSpec::new(
        "GeometryNodeResampleCurve",
        &[
            attr("keep_last_segment", Bool).since(V4_4),
            attr("mode", Enum).until(V5_0),
        ],
    ),
    NodeSpec::new("GeometryNodeReverseCurve", &[]),
    NodeSpec::new("GeometryNodeRotateInstances", &[]),
    NodeSpec::new("GeometryNodeSDFGridBoolean", &[attr("operation", Enum)]),
    NodeSpec::new("GeometryNodeSDFGridFillet", &[]).since(V5_0),
    NodeSpec::new("GeometryNodeSDFGridLaplacian", &[]).since(V5_0),
    NodeSpec::new("GeometryNodeSDFGridMean", &[]).since(V5_0),
    NodeSpec::new("GeometryNodeSDFGridMeanCurvature", &[]).since(V5_0),
    NodeSpec::new("GeometryNodeSDFGridMedian", &[]).since(V5_0),
    NodeSpec::new("GeometryNodeSDFGridOffset", &[]).since(V5_0),
    NodeSpec::new(
        "GeometryNodeSampleCurve",
        &[
            attr("data_type", Enum),
            attr("mode", Enum),
            attr("use_all_curves", Bool),
        ],
    ),
    NodeSpec::new(
        "GeometryNodeSampleGrid",
        &[
            attr("data_type", Enum),
            attr("interpolation_mode", Enum).until(V5_0),
        ],
    ),
    NodeSpec::new("GeometryNodeSampleGridIndex", &[attr("data_type", Enum)]),
    NodeSpec::new(
        "GeometryNodeSampleIndex",
        &[
            attr("clamp", Bool),
            attr("data_type", Enum),
            attr("domain", Enum),
        ],
    ),
    NodeSpec::new("GeometryNodeSampleNearest", &[attr("domain", Enum)]),
    NodeSpec::new("GeometryNodeSampleNearestSurface", &[attr("data_type", Enum)]),
    NodeSpec::new("GeometryNodeSampleUVSurface", &[attr("data_type", Enum)]),
    NodeSpec::new(
        "GeometryNodeScaleElements",
        &[
            attr("domain", Enum),
            attr("scale_mode", Enum).until(V5_0),
        ],
    ),
    NodeSpec::new("GeometryNodeScaleInstances", &[]),
    NodeSpec::new("GeometryNodeSelfObject", &[]),
    NodeSpec::new(
        "GeometryNodeSeparateBundle",
        &[
            attr("active_index", Int),
        ],
    ).since(V4_5).until(V5_0),
    NodeSpec::new("GeometryNodeSeparateComponents", &[]),
    NodeSpec::new("GeometryNodeSeparateGeometry", &[attr("domain", Enum)]),
    NodeSpec::new("GeometryNodeSetCurveHandlePositions", &[attr("mode", Enum)]),
    NodeSpec::new("GeometryNodeSetCurveNormal", &[attr("mode", Enum).until(V5_0)]),
    NodeSpec::new("GeometryNodeSetCurveRadius", &[]),
    NodeSpec::new("GeometryNodeSetCurveTilt", &[]),
    NodeSpec::new("GeometryNodeSetGeometryName", &[]).since(V4_3),
    NodeSpec::new("GeometryNodeSetGreasePencilColor", &[attr("mode", Enum)]).since(V4_5),
    NodeSpec::new("GeometryNodeSetGreasePencilDepth", &[attr("depth_order", Enum)]).since(V4_5),
    NodeSpec::new("GeometryNodeSetGreasePencilSoftness", &[]).since(V4_5),
    NodeSpec::new("GeometryNodeSetGridBackground", &[attr("data_type", Enum)]).since(V5_0),
    NodeSpec::new("GeometryNodeSetGridTransform", &[attr("data_type", Enum)]).since(V5_0),
    NodeSpec::new("GeometryNodeSetID", &[]),
    NodeSpec::new("GeometryNodeSetInstanceTransform", &[]),
    NodeSpec::new("GeometryNodeSetMaterial", &[]),
    NodeSpec::new("GeometryNodeSetMaterialIndex", &[]),
    NodeSpec::new(
        "GeometryNodeSetMeshNormal",
        &[
            attr("domain", Enum),
            attr("mode", Enum),
        ],
    ).since(V4_5),
    NodeSpec::new("GeometryNodeSetPointRadius", &[]),
    NodeSpec::new("GeometryNodeSetPosition", &[]),
    NodeSpec::new("GeometryNodeSetShadeSmooth", &[attr("domain", Enum)]),
    NodeSpec::new("GeometryNodeSetSplineCyclic", &[]),
    NodeSpec::new("GeometryNodeSetSplineResolution", &[]),
    NodeSpec::new("GeometryNodeSimulationInput", &[]),
    NodeSpec::new(
        "GeometryNodeSimulationOutput",
        &[
            attr("active_index", Int),
            attr("state_items", SimOutputItems),
        ],
    ),
    NodeSpec::new("GeometryNodeSortElements", &[attr("domain", Enum)]),
    NodeSpec::new("GeometryNodeSplineLength", &[]),
    NodeSpec::new("GeometryNodeSplineParameter", &[]),
    NodeSpec::new("GeometryNodeSplitEdges", &[]),
    NodeSpec::new("GeometryNodeSplitToInstances", &[attr("domain", Enum)]),
    NodeSpec::new(
        "GeometryNodeStoreNamedAttribute",
        &[
            attr("data_type", Enum),
            attr("domain", Enum),
        ],
    ),
    NodeSpec::new("GeometryNodeStoreNamedGrid", &[attr("data_type", Enum)]),
    NodeSpec::new("GeometryNodeStringJoin", &[]),
    NodeSpec::new(
        "GeometryNodeStringToCurves",
        &[
            attr("align_x", Enum),
            attr("align_y", Enum),
            attr("font", Font),
            attr("overflow", Enum),
            attr("pivot_mode", Enum),
        ],
    ),
    NodeSpec::new("GeometryNodeSubdivideCurve", &[]),
    NodeSpec::new("GeometryNodeSubdivideMesh", &[]),
    NodeSpec::new(
        "GeometryNodeSubdivisionSurface",
        &[
            attr("boundary_smooth", Enum).until(V5_0),
            attr("uv_smooth", Enum).until(V5_0),
        ],
    ),
    NodeSpec::new("GeometryNodeSwitch", &[attr("input_type", Enum)]),
    NodeSpec::new("GeometryNodeTool3DCursor", &[]),
    NodeSpec::new("GeometryNodeToolActiveElement", &[attr("domain", Enum)]),
    NodeSpec::new("GeometryNodeToolFaceSet", &[]),
    NodeSpec::new("GeometryNodeToolMousePosition", &[]),
    NodeSpec::new("GeometryNodeToolSelection", &[]),
    NodeSpec::new("GeometryNodeToolSetFaceSet", &[]),
    NodeSpec::new(
        "GeometryNodeToolSetSelection",
        &[
            attr("domain", Enum),
            attr("selection_type", Enum).since(V4_3),
        ],
    ),
    NodeSpec::new("GeometryNodeTransform", &[attr("mode", Enum).until(V5_0)]),
    NodeSpec::new("GeometryNodeTranslateInstances", &[]),
    NodeSpec::new(
        "GeometryNodeTriangulate",
        &[
            attr("ngon_method", Enum).until(V5_0),
            attr("quad_method", Enum).until(V5_0),
        ],
    ),
    NodeSpec::new("GeometryNodeTrimCurve", &[attr("mode", Enum)]),
    NodeSpec::new("GeometryNodeUVPackIslands", &[]),
    NodeSpec::new("GeometryNodeUVTangent", &[]).since(V5_0),
    NodeSpec::new("GeometryNodeUVUnwrap", &[attr("method", Enum).until(V5_0)]),
    NodeSpec::new("GeometryNodeVertexOfCorner", &[]),
    NodeSpec::new(
        "GeometryNodeViewer",
        &[
            attr("active_index", Int).since(V5_0),
            attr("data_type", Enum).until(V5_0),
            attr("domain", Enum),
            attr("ui_shortcut", Int).since(V4_5),
            attr("viewer_items", GeometryViewerItems).since(V5_0),
        ],
    ),
    NodeSpec::new("GeometryNodeViewportTransform", &[]),
    NodeSpec::new("GeometryNodeVolumeCube", &[]),
    NodeSpec::new("GeometryNodeVolumeToMesh", &[attr("resolution_mode", Enum).until(V5_0)]),
    NodeSpec::new("GeometryNodeWarning", &[attr("warning_type", Enum)]).since(V4_3),
];
