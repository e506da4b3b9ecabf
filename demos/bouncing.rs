use particle_sandbox::*;

fn main() {
    let mut engine = SandboxEngine::default();
    engine.set_parameter(Parameter::Gravity, 1.0);
    engine.set_parameter(Parameter::Elasticity, 0.9);

    let left = engine.spawn(Vec2::new(200.0, 400.0));
    let right = engine.spawn(Vec2::new(800.0, 400.0));
    engine.launch(left, Vec2::new(2.0, -1.0));
    engine.launch(right, Vec2::new(-2.0, -1.0));

    for frame in 0..300 {
        let snapshots = engine.tick();
        if frame % 60 == 0 {
            for snapshot in &snapshots {
                println!(
                    "frame {frame}: body {:?} at {} velocity {:?}",
                    snapshot.id, snapshot.position, snapshot.velocity
                );
            }
        }
    }
}
