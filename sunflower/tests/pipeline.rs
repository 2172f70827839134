use approx::assert_abs_diff_eq;
use config::Config;
use easyeda::{Command, Document, Recorder, Shape};
use geometry::prelude::*;
use sunflower::{Error, Layout, PadRole};
use test_log::test;

const BOARD: &str = include_str!("data/board.json");

fn config() -> Config {
    Config::from_toml(
        r#"
        [field]
        seed-count = 12
        field-size = 20

        [ring]
        points = 5
        "#,
    )
    .unwrap()
}

fn recorder() -> Recorder {
    Recorder::new(Document::from_json(BOARD).unwrap())
}

#[test]
fn places_chained_devices_in_designator_order() {
    let layout = Layout::new(&config()).unwrap();
    assert_eq!(
        layout.strip().as_slice(),
        &[6, 1, 9, 4, 7, 2, 10, 5, 0, 8, 3, 11]
    );

    let mut host = recorder();
    let placements = layout.place_devices(&mut host).unwrap();

    let ids: Vec<_> = placements.iter().map(|p| p.device.id.as_str()).collect();
    assert_eq!(ids, vec!["gge10", "gge20"]);
    assert_eq!(placements[0].seed, 6);
    assert_eq!(placements[1].seed, 1);

    let commands = host.commands();
    // origin, then a move, a rotation and six vias per device.
    assert_eq!(commands.len(), 1 + 2 * 8);
    assert_eq!(commands[0], Command::SetOrigin { x: 0., y: 0. });

    match &commands[1] {
        Command::MoveObjsTo { objs, x, y } => {
            assert_eq!(objs[0].id, "gge10");
            assert_abs_diff_eq!(*x, -12.36327174092045, epsilon = 1e-9);
            assert_abs_diff_eq!(*y, 45.99075463460192, epsilon = 1e-9);
        }
        other => panic!("expected a move, got {other:?}"),
    }
    match &commands[2] {
        Command::Rotate { ids, degree } => {
            assert_eq!(ids, &vec!["gge10".to_string()]);
            assert_abs_diff_eq!(*degree, 15.046584300227222, epsilon = 1e-9);
        }
        other => panic!("expected a rotation, got {other:?}"),
    }

    let vias: Vec<_> = commands
        .iter()
        .filter_map(|c| match c {
            Command::CreateShape(Shape::Via(via)) => Some(via),
            _ => None,
        })
        .collect();
    assert_eq!(vias.len(), 12);
    assert_eq!(vias[0].id, "_D1_vcc");
    assert_eq!(vias[0].net, "+5V");
    assert_eq!(vias[3].id, "_D1_sdi");
    assert_eq!(vias[3].net, "D1_1");
    assert_eq!(vias[8].id, "_D2_sdo");
    assert_eq!(vias[8].net, "D3_6");
    assert_eq!(vias[9].net, "D1_6");

    // Outputs of the first device meet the inputs of the second.
    assert_eq!(
        placements[0].pad(PadRole::DataOut).net,
        placements[1].pad(PadRole::DataIn).net
    );
    assert_eq!(
        placements[0].pad(PadRole::ClockOut).net,
        placements[1].pad(PadRole::ClockIn).net
    );
}

#[test]
fn recorded_commands_match_the_host_api() {
    let layout = Layout::new(&config()).unwrap();
    let mut host = recorder();
    layout.place_devices(&mut host).unwrap();

    let json: serde_json::Value = serde_json::from_str(&host.to_json().unwrap()).unwrap();
    let commands = json.as_array().unwrap();
    assert_eq!(commands[0]["api"], "setOriginXY");
    assert_eq!(commands[1]["api"], "moveObjsTo");
    assert_eq!(commands[1]["args"]["objs"][0]["gId"], "gge10");
    assert_eq!(commands[2]["api"], "rotate");
    assert_eq!(commands[3]["api"], "createShape");
    assert_eq!(commands[3]["args"]["shapeType"], "VIA");
    assert_eq!(commands[3]["args"]["jsonCache"]["gId"], "_D1_vcc");
    assert_eq!(commands[3]["args"]["jsonCache"]["layerid"], 11);
}

#[test]
fn draws_ring_around_walked_seeds() {
    let layout = Layout::new(&config()).unwrap();
    let mut host = recorder();
    let ring = layout.draw_ring(&mut host).unwrap();

    assert_eq!(host.commands(), &[Command::CreateShape(ring.clone().into())]);
    assert_eq!(ring.layer, "1");
    assert_eq!(ring.locked, 0);
    assert_abs_diff_eq!(ring.clearance_width, 0.3 / 0.254, epsilon = 1e-12);
    assert!(ring.path.starts_with("M "));
    assert!(ring.path.ends_with(" Z"));
    assert_eq!(ring.path.matches(" L ").count(), 4);

    // The ring runs through the outer walked seeds; headroom seeds never reach it.
    let contour = layout.contour();
    let outer = layout.seeds()[11].radius;
    let inner = layout.seeds()[12 - 5].radius;
    for p in contour.vertices() {
        let r = p.to_polar().radius;
        assert!(r <= outer + 1e-9);
        assert!(r >= inner - 1e-9);
    }
}

#[test]
fn rejects_more_devices_than_seeds() {
    let mut config = config();
    config.field.seed_count = 1;
    config.ring.points = 1;
    let layout = Layout::new(&config).unwrap();
    let mut host = recorder();
    assert!(matches!(
        layout.place_devices(&mut host),
        Err(Error::TooManyDevices {
            devices: 2,
            seed_count: 1
        })
    ));
}

#[test]
fn rejects_invalid_field() {
    let mut config = config();
    config.field.seed_count = 21;
    assert!(matches!(
        Layout::new(&config),
        Err(Error::SeedCountExceedsField {
            seed_count: 21,
            field_size: 20
        })
    ));

    let mut config = self::config();
    config.ring.points = 13;
    assert!(matches!(
        Layout::new(&config),
        Err(Error::RingExceedsSeeds {
            points: 13,
            seed_count: 12
        })
    ));
}

#[test]
fn document_survives_a_round_trip() {
    let doc = Document::from_json(BOARD).unwrap();
    let again = Document::from_json(&doc.to_json().unwrap()).unwrap();
    assert_eq!(doc, again);
    assert_eq!(doc.extra["head"]["docType"], "3");
    assert_eq!(doc.position("gge20"), Some(Point::new(4100.5, 3200.25)));
}
