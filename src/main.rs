//! Hex Bounce entry point
//!
//! The browser build is driven through the `HexagonWidget` bindings; this
//! binary runs the simulation headless as a smoke check for the physics.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use hex_bounce::config::PhysicsConfig;
    use hex_bounce::consts::SIM_DT;
    use hex_bounce::runloop::SimLoop;
    use hex_bounce::scheduler::ManualScheduler;
    use hex_bounce::simulator::HexagonBallSimulator;

    env_logger::init();
    log::info!("Hex Bounce (headless) starting...");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let simulator = HexagonBallSimulator::new(480.0, 480.0, PhysicsConfig::default(), seed);
    let circumradius = simulator.state().circumradius;

    let scheduler = ManualScheduler::new();
    let sim_loop = SimLoop::new(scheduler.clone(), simulator, Box::new(|_| {}));
    sim_loop.start();

    // Drive ten simulated seconds of frames and watch the containment
    let frame_ms = SIM_DT as f64 * 1000.0;
    let mut max_radius: f32 = 0.0;
    for frame in 0..600 {
        scheduler.fire(frame as f64 * frame_ms);
        max_radius = sim_loop.with_simulator(|sim| max_radius.max(sim.state().ball.pos.length()));
    }
    sim_loop.stop();

    let (pos, rotation) = sim_loop.with_simulator(|sim| (sim.state().ball.pos, sim.state().rotation));
    log::info!(
        "600 frames done: ball at ({:.1}, {:.1}), rotation {:.2} rad, max |pos| {:.1} (circumradius {:.1})",
        pos.x,
        pos.y,
        rotation,
        max_radius,
        circumradius
    );
    assert!(max_radius <= circumradius, "ball escaped the hexagon");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the widget's start hook, this is just to satisfy
    // the compiler
}
