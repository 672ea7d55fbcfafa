use criterion::{criterion_group, criterion_main, Criterion};
use tilecraft::catalog::{Tile, TileCatalog, TileId};
use tilecraft::chunk::generator::ChunkGenerator;
use tilecraft::chunk::ChunkCoord;
use tilecraft::landtype::{LandHeights, LandType};
use tilecraft::noise_stack::{NoiseArgs, NoiseStack};

fn bench_catalog() -> TileCatalog {
    let mut cat = TileCatalog::default();
    for (i, name) in ["grass_1", "grass_2", "grass_3", "water", "rock", "tree_1", "tree_2", "tree_3", "spell_red"].iter().enumerate() {
        cat.register(Tile { name: (*name).to_string(), id: TileId(i as u32), x: Some("gggggggg".to_string()), ..Tile::default() }).unwrap();
    }
    cat
}

fn chunk_generation(c: &mut Criterion) {
    let catalog = bench_catalog();
    let terrain = NoiseStack::build(&[NoiseArgs { amplitude: 1.0, octaves: 4.0 }, NoiseArgs { amplitude: 0.5, octaves: 2.0 }], 7);
    let biome = NoiseStack::build(&[NoiseArgs { amplitude: 1.0, octaves: 3.0 }], 11);
    let land_heights = LandHeights::new(vec![(LandType::Rock, 0.5), (LandType::Grass, -0.2), (LandType::Water, -1.0)]);
    let generator = ChunkGenerator {
        catalog: &catalog,
        terrain_noise: &terrain,
        biome_noise: &biome,
        land_heights: &land_heights,
        forest_threshold: 0.3,
        world_seed: 1234,
    };

    c.bench_function("generate a single chunk", |b| {
        b.iter(|| generator.generate(ChunkCoord::new(0, 0), 0.0));
    });

    c.bench_function("generate a 16-chunk neighbourhood", |b| {
        b.iter(|| {
            for i in 0..4 {
                for j in 0..4 {
                    generator.generate(ChunkCoord::new(i, j), 0.0);
                }
            }
        });
    });
}

criterion_group!(benches, chunk_generation);
criterion_main!(benches);
