use serde::Serialize;
use std::env;
use std::path::Path;

use surface_anchor::anchor::Anchor;
use surface_anchor::config::gesture_replay as cfg;
use surface_anchor::config::gesture_replay::{ScriptEvent, ScriptPhase};
use surface_anchor::config::write_json_file;
use surface_anchor::gesture::{GesturePhase, GestureResolver};
use surface_anchor::raycast::SceneRef;
use surface_anchor::types::{PlacementIntent, PlaneModel};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[derive(Serialize)]
struct TraceStep {
    index: usize,
    /// Resolver phase after the event was applied.
    phase: GesturePhase,
    intent: Option<PlacementIntent>,
}

#[derive(Serialize)]
struct ReplayTrace {
    steps: Vec<TraceStep>,
    anchor: Anchor,
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = cfg::load_config(Path::new(&config_path))?;
    let script = cfg::load_script(&config.script)?;

    let camera = config.camera.resolve(config.viewport);
    let surface = PlaneModel::horizontal(config.plane_height);
    let scene = SceneRef {
        camera: &camera,
        surface: &surface,
        viewport: config.viewport,
    };

    let mut resolver = GestureResolver::new(config.gesture.resolve());
    let mut anchor = Anchor::default();
    anchor.align_to_surface(&surface);

    let mut steps = Vec::with_capacity(script.len());
    for (index, event) in script.iter().enumerate() {
        let intent = dispatch(&mut resolver, event, &scene);
        if let Some(intent) = intent {
            anchor.apply(intent);
        }
        steps.push(TraceStep {
            index,
            phase: resolver.phase(),
            intent,
        });
    }

    print_text_summary(&steps, &resolver, &anchor);

    if let Some(path) = &config.output.trace_json {
        let trace = ReplayTrace { steps, anchor };
        write_json_file(path, &trace)?;
        println!("\nReplay trace written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: gesture_replay <config.json>".to_string()
}

fn dispatch(
    resolver: &mut GestureResolver,
    event: &ScriptEvent,
    scene: &SceneRef<'_>,
) -> Option<PlacementIntent> {
    match event.phase {
        ScriptPhase::Start => resolver.on_touch_start(&event.touches, scene),
        ScriptPhase::Move => resolver.on_touch_move(&event.touches, scene),
        ScriptPhase::End => resolver.on_touch_end(&event.touches, scene),
    }
}

fn print_text_summary(steps: &[TraceStep], resolver: &GestureResolver, anchor: &Anchor) {
    let emitted = steps.iter().filter(|s| s.intent.is_some()).count();
    println!("Replay summary");
    println!("  events: {} ({} intents)", steps.len(), emitted);
    for step in steps {
        if let Some(intent) = &step.intent {
            println!("  #{:03} {}", step.index, describe(intent));
        }
    }
    println!("  final phase: {:?}", resolver.phase());

    println!("\nAnchor");
    println!("  placed: {}", anchor.placed);
    println!(
        "  position: [{:.3}, {:.3}, {:.3}]",
        anchor.position.x, anchor.position.y, anchor.position.z
    );
    println!("  scale: {:.3}", anchor.scale);
}

fn describe(intent: &PlacementIntent) -> String {
    match intent {
        PlacementIntent::PlaceAt(p) => format!("place_at [{:.3}, {:.3}, {:.3}]", p.x, p.y, p.z),
        PlacementIntent::MoveTo(p) => format!("move_to [{:.3}, {:.3}, {:.3}]", p.x, p.y, p.z),
        PlacementIntent::ScaleBy(f) => format!("scale_by {:.3}", f),
    }
}
