use geometry::prelude::*;
use serde_json::json;
use test_log::test;

use crate::*;

fn board() -> serde_json::Value {
    json!({
        "head": { "docType": "3", "editorVersion": "6.5.22" },
        "canvas": { "snapSize": 5.0, "originX": 400.0, "originY": 300.0, "unit": "mil" },
        "FOOTPRINT": {
            "gge7": {
                "head": { "c_para": "package`SK9822 LED`pre`D?`", "x": 10.0, "y": 20.0 },
                "TEXT": {
                    "gge8": { "type": "N", "text": "SK9822" },
                    "gge9": { "type": "P", "text": "D12" }
                },
                "PAD": { "gge10": { "number": "1" } }
            }
        },
        "TRACK": {
            "gge20": { "strokeWidth": 1, "pointArr": [{ "x": 1.0, "y": 2.0 }, { "x": 7.0, "y": 3.0 }] }
        }
    })
}

#[test]
fn reads_modeled_fields() {
    let doc: Document = serde_json::from_value(board()).unwrap();
    let footprint = &doc.footprints["gge7"];
    assert_eq!(footprint.designator(), Some("D12"));
    assert_eq!(footprint.param("package"), Some("SK9822 LED"));
    assert_eq!(doc.position("gge7"), Some(Point::new(10., 20.)));
    assert_eq!(doc.position("nope"), None);

    let canvas = doc.canvas.as_ref().unwrap();
    assert_eq!(canvas.snap_size, 5.);
    assert_eq!(canvas.origin(), Point::new(400., 300.));
    assert_eq!(doc.tracks["gge20"].points[1].point(), Point::new(7., 3.));
}

// Coordinates are written as floats, so the fixture uses floats throughout.
#[test]
fn round_trips_unmodeled_fields() {
    let doc: Document = serde_json::from_value(board()).unwrap();
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value, board());
}

#[test]
fn reads_and_writes_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");
    std::fs::write(&path, board().to_string()).unwrap();

    let doc = Document::from_path(&path).unwrap();
    let copy = dir.path().join("copy.json");
    doc.write_to(&copy).unwrap();
    assert_eq!(Document::from_path(&copy).unwrap(), doc);
}

#[test]
fn rejects_malformed_json() {
    assert!(matches!(Document::from_json("{"), Err(Error::Json(_))));
}

#[test]
fn designator_without_text_is_none() {
    let footprint = Footprint::default();
    assert_eq!(footprint.designator(), None);
    assert_eq!(footprint.param("package"), None);
}

#[test]
fn recorder_records_calls_in_order() {
    let doc: Document = serde_json::from_value(board()).unwrap();
    let mut host = Recorder::new(doc).with_selection(["gge7".to_string()]);

    host.set_origin(Point::zero()).unwrap();
    host.move_object("gge7", Point::new(1., -2.)).unwrap();
    host.rotate_object("gge7", 315.).unwrap();
    host.create_shape(&Shape::Via(Via {
        id: "_D12_gnd".into(),
        diameter: 3.5,
        hole_radius: 1.2,
        layer: 11,
        x: 1.,
        y: 2.,
        net: "GND".into(),
    }))
    .unwrap();
    assert_eq!(host.selected_ids().unwrap(), vec!["gge7".to_string()]);

    let commands = serde_json::to_value(host.commands()).unwrap();
    assert_eq!(
        commands,
        json!([
            { "api": "setOriginXY", "args": { "x": 0.0, "y": 0.0 } },
            { "api": "moveObjsTo", "args": { "objs": [{ "gId": "gge7" }], "x": 1.0, "y": -2.0 } },
            { "api": "rotate", "args": { "ids": ["gge7"], "degree": 315.0 } },
            { "api": "createShape", "args": {
                "shapeType": "VIA",
                "jsonCache": {
                    "gId": "_D12_gnd", "diameter": 3.5, "holeR": 1.2, "layerid": 11,
                    "x": 1.0, "y": 2.0, "net": "GND"
                }
            } }
        ])
    );
}

#[test]
fn recorder_applies_moves_and_origin_to_its_document() {
    let mut doc: Document = serde_json::from_value(board()).unwrap();
    doc.schlib.insert(
        "gge30".into(),
        SchLib {
            head: Head {
                x: Some(0.),
                y: Some(0.),
                ..Default::default()
            },
            ..Default::default()
        },
    );
    let mut host = Recorder::new(doc);

    host.set_origin(Point::new(-5., 6.)).unwrap();
    host.move_object("gge7", Point::new(1., -2.)).unwrap();
    host.move_object("gge30", Point::new(100., 0.)).unwrap();

    let doc = host.read_document().unwrap();
    assert_eq!(doc.canvas.as_ref().unwrap().origin(), Point::new(-5., 6.));
    assert_eq!(doc.position("gge7"), Some(Point::new(1., -2.)));
    assert_eq!(doc.position("gge30"), Some(Point::new(100., 0.)));
    // Fields the move does not touch survive.
    assert_eq!(doc.footprints["gge7"].designator(), Some("D12"));
}

#[test]
fn recorder_rejects_unknown_objects() {
    let mut host = Recorder::new(Document::default());
    assert!(matches!(
        host.move_object("ghost", Point::zero()),
        Err(Error::UnknownObject(id)) if id == "ghost"
    ));
    assert!(host.commands().is_empty());
}

#[test]
fn copper_area_uses_host_field_names() {
    let shape = Shape::from(CopperArea {
        layer: "1".into(),
        clearance_width: 1.,
        to_board_outline: 1.,
        fill_style: "solid".into(),
        thermal: "spoke".into(),
        spoke_width: 0.,
        keep_island: "none".into(),
        path: "M 0 0 L 1 0 L 0 1 Z".into(),
        locked: 0,
    });
    let value = serde_json::to_value(&shape).unwrap();
    assert_eq!(value["shapeType"], "COPPERAREA");
    let cache = &value["jsonCache"];
    for key in [
        "layerid",
        "clearanceWidth",
        "toBoardOutline",
        "fillStyle",
        "thermal",
        "spoke_width",
        "keepIsland",
        "pathStr",
        "locked",
    ] {
        assert!(cache.get(key).is_some(), "missing `{key}`");
    }
    assert_eq!(serde_json::from_value::<Shape>(value).unwrap(), shape);
}

#[test]
fn apply_document_replaces_and_records() {
    let mut host = Recorder::new(Document::default());
    let doc: Document = serde_json::from_value(board()).unwrap();
    host.apply_document(&doc).unwrap();
    assert_eq!(host.read_document().unwrap(), doc);
    assert!(matches!(
        host.commands(),
        [Command::ApplySource { create_new: false, .. }]
    ));
}
