use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polygon_physics::{math::vec2::Vec2, objects::RigidBody, world::PhysicsWorld};

// Static floor plus a column of boxes with a small gap between them
fn build_box_stack(world: &mut PhysicsWorld, num_boxes: usize) {
    let floor = RigidBody::rect(Vec2::new(0.0, -0.5), 20.0, 1.0, 1.0)
        .expect("valid floor")
        .into_static();
    world.add_body(floor);

    for i in 0..num_boxes {
        let y_pos = 0.5 + i as f64 * 1.05;
        world.add_body(RigidBody::rect(Vec2::new(0.0, y_pos), 1.0, 1.0, 1.0).expect("valid box"));
    }
}

// Regular polygons scattered on a grid, all spinning
fn build_polygon_field(world: &mut PhysicsWorld, num_bodies: usize) {
    let columns = (num_bodies as f64).sqrt().ceil() as usize;
    for i in 0..num_bodies {
        let position = Vec2::new((i % columns) as f64 * 1.5, (i / columns) as f64 * 1.5);
        let mut body = RigidBody::regular(position, 3 + i % 5, 0.8, 1.0).expect("valid polygon");
        body.angular_velocity = 1.0;
        body.linear_velocity = Vec2::new(if i % 2 == 0 { 1.0 } else { -1.0 }, 0.0);
        world.add_body(body);
    }
}

// Benchmark for a stack of boxes settling on a floor
fn bench_box_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_stack");

    for num_boxes in [5, 20, 50].iter() {
        group.bench_with_input(criterion::BenchmarkId::from_parameter(num_boxes), num_boxes, |b, &n| {
            b.iter(|| {
                let mut world = PhysicsWorld::new();
                world.config.gravity = Vec2::new(0.0, -10.0);
                world.config.target_substep_dt = 1e-3; // Coarser substeps for benchmark speed
                build_box_stack(&mut world, black_box(n));
                for _ in 0..10 {
                    world.step(black_box(1.0 / 60.0)).expect("valid step");
                }
            });
        });
    }
    group.finish();
}

// Benchmark for many mixed polygons with the default substep size
fn bench_polygon_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_field");

    for num_bodies in [10, 50, 100].iter() {
        group.bench_with_input(criterion::BenchmarkId::from_parameter(num_bodies), num_bodies, |b, &n| {
            b.iter(|| {
                let mut world = PhysicsWorld::new();
                build_polygon_field(&mut world, black_box(n));
                world.step(black_box(1.0 / 60.0)).expect("valid step");
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_box_stack, bench_polygon_field);
criterion_main!(benches);
