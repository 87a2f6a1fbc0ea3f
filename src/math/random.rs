use crate::math::{real, Real, Vec3};

use rand::distributions::uniform::SampleUniform;
use rand::Rng;

/// Vector with every component drawn uniformly from `[a, b)`.
///
/// Panics if `a >= b`, as [`Rng::gen_range`] does.
pub fn random_vector<T, R>(rng: &mut R, a: T, b: T) -> Vec3<T>
where
    T: Real + SampleUniform,
    R: Rng + ?Sized,
{
    Vec3::new(rng.gen_range(a..b), rng.gen_range(a..b), rng.gen_range(a..b))
}

/// Uniformly distributed direction, using Marsaglia's rejection method on the unit disk.
pub fn random_vector_on_unit_sphere<T, R>(rng: &mut R) -> Vec3<T>
where
    T: Real + SampleUniform,
    R: Rng + ?Sized,
{
    let (one, two) = (T::one(), real::<T>(2.0));
    loop {
        let xi1 = one - two * rng.gen_range(T::zero()..one);
        let xi2 = one - two * rng.gen_range(T::zero()..one);
        let dsq = xi1 * xi1 + xi2 * xi2;
        if dsq < one {
            let ranh = two * (one - dsq).sqrt();
            return Vec3::new(xi1 * ranh, xi2 * ranh, one - two * dsq);
        }
    }
}
