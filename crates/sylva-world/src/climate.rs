use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::worldgen::{BiomeDefParam, BiomesParams};

/// A biome definition together with the climate sampled at one column.
#[derive(Clone, Copy, Debug)]
pub struct BiomeSample<'p> {
    pub def: &'p BiomeDefParam,
    pub temp: f32,
    pub moisture: f32,
}

/// Temperature/moisture field sampler bound to one world seed. Binding is
/// an explicit construction; a new world means a new sampler.
pub struct ClimateSampler<'p> {
    temp: FastNoiseLite,
    moist: FastNoiseLite,
    biomes: &'p BiomesParams,
}

impl<'p> ClimateSampler<'p> {
    pub fn bind(seed: i32, biomes: &'p BiomesParams) -> Self {
        let mut temp = FastNoiseLite::with_seed(seed ^ 0x1203_5F31);
        temp.set_noise_type(Some(NoiseType::OpenSimplex2));
        temp.set_frequency(Some(biomes.temp_freq));
        let mut moist = FastNoiseLite::with_seed(((seed as u32) ^ 0x92E3_A1B2u32) as i32);
        moist.set_noise_type(Some(NoiseType::OpenSimplex2));
        moist.set_frequency(Some(biomes.moisture_freq));
        Self {
            temp,
            moist,
            biomes,
        }
    }

    /// Normalized (temperature, moisture) in [0, 1] at a world column.
    pub fn climate_for(&self, wx: i32, wz: i32) -> (f32, f32) {
        let sx = if self.biomes.scale_x == 0.0 {
            1.0
        } else {
            self.biomes.scale_x
        };
        let sz = if self.biomes.scale_z == 0.0 {
            1.0
        } else {
            self.biomes.scale_z
        };
        let x = wx as f32 * sx;
        let z = wz as f32 * sz;
        let tt = ((self.temp.get_noise_2d(x, z) + 1.0) * 0.5).clamp(0.0, 1.0);
        let mm = ((self.moist.get_noise_2d(x, z) + 1.0) * 0.5).clamp(0.0, 1.0);
        (tt, mm)
    }

    /// First biome whose climate window contains the sampled column.
    pub fn biome_for(&self, wx: i32, wz: i32) -> Option<BiomeSample<'p>> {
        let (temp, moisture) = self.climate_for(wx, wz);
        for def in &self.biomes.defs {
            if temp >= def.temp_min
                && temp < def.temp_max
                && moisture >= def.moisture_min
                && moisture < def.moisture_max
            {
                return Some(BiomeSample {
                    def,
                    temp,
                    moisture,
                });
            }
        }
        None
    }
}
