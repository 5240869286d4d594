use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::components::Particle;
use crate::params::Params;
use crate::resources::GameRng;

/// Spawn a burst of particles where a point was just scored
pub fn spawn_burst(world: &mut World, pos: Vec2, rng: &mut GameRng) {
    for _ in 0..Params::PARTICLE_BURST {
        let vel = Vec2::new(
            rng.0.gen_range(-Params::PARTICLE_SPREAD..Params::PARTICLE_SPREAD),
            rng.0.gen_range(-Params::PARTICLE_SPREAD..Params::PARTICLE_SPREAD),
        );
        world.spawn((Particle {
            pos,
            vel,
            life: Params::PARTICLE_LIFE,
        },));
    }
}

/// Advance particles and despawn the expired ones
pub fn update_particles(world: &mut World) {
    let mut expired = Vec::new();
    for (entity, particle) in world.query_mut::<&mut Particle>() {
        particle.pos += particle.vel;
        particle.life -= Params::PARTICLE_DECAY;
        if particle.life <= 0 {
            expired.push(entity);
        }
    }
    for entity in expired {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle_count(world: &World) -> usize {
        world.query::<&Particle>().iter().count()
    }

    #[test]
    fn test_burst_spawns_fixed_count() {
        let mut world = World::new();
        let mut rng = GameRng::new(7);

        spawn_burst(&mut world, Vec2::new(400.0, 300.0), &mut rng);

        assert_eq!(particle_count(&world), Params::PARTICLE_BURST);
        for (_e, p) in world.query::<&Particle>().iter() {
            assert_eq!(p.pos, Vec2::new(400.0, 300.0));
            assert_eq!(p.life, Params::PARTICLE_LIFE);
            assert!(p.vel.x.abs() <= Params::PARTICLE_SPREAD);
            assert!(p.vel.y.abs() <= Params::PARTICLE_SPREAD);
        }
    }

    #[test]
    fn test_particles_decay_and_despawn() {
        let mut world = World::new();
        let mut rng = GameRng::new(7);
        spawn_burst(&mut world, Vec2::new(100.0, 100.0), &mut rng);

        // Life 100 at decay 2 per tick: gone on the 50th update
        for _ in 0..49 {
            update_particles(&mut world);
        }
        assert_eq!(particle_count(&world), Params::PARTICLE_BURST);

        update_particles(&mut world);
        assert_eq!(particle_count(&world), 0);
    }

    #[test]
    fn test_particles_drift_by_velocity() {
        let mut world = World::new();
        world.spawn((Particle {
            pos: Vec2::new(10.0, 10.0),
            vel: Vec2::new(1.5, -0.5),
            life: 100,
        },));

        update_particles(&mut world);

        for (_e, p) in world.query::<&Particle>().iter() {
            assert_eq!(p.pos, Vec2::new(11.5, 9.5));
            assert_eq!(p.life, 98);
        }
    }
}
