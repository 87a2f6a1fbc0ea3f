use crate::math::{MathError, Point3, Real, Scalar, Vec2, Vec3, Vec4, Vector};

use serde::{Deserialize, Serialize};

use std::fmt;
use std::ops::{
    Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

// Matrices are stored as rows: `m[i][j]` is row i, column j, and vectors are columns (`m * v`).
macro_rules! generate_matrix {
    ($name:ident, $row:ident, $dim:literal, $( $i:literal ),+) => {
        #[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
        pub struct $name<T> {
            rows: [$row<T>; $dim],
        }

        impl<T: Scalar> $name<T> {
            pub fn from_rows(rows: [$row<T>; $dim]) -> Self {
                $name { rows }
            }

            /// Every element set to `value`.
            pub fn splat(value: T) -> Self {
                $name {
                    rows: [$row::splat(value); $dim],
                }
            }

            pub fn zero() -> Self {
                Self::splat(T::zero())
            }

            pub fn identity() -> Self {
                let mut m = Self::zero();
                for i in 0..$dim {
                    m.rows[i][i] = T::one();
                }
                m
            }

            pub fn rows(&self) -> [$row<T>; $dim] {
                self.rows
            }

            pub fn column(&self, j: usize) -> $row<T> {
                $row::from([$( self[$i][j] ),+])
            }

            pub fn map<F: Fn(T) -> T>(self, f: F) -> Self {
                $name {
                    rows: self.rows.map(|row| row.map(&f)),
                }
            }

            pub fn trace(&self) -> T {
                T::zero() $( + self.rows[$i][$i] )+
            }

            pub fn transpose(&self) -> Self {
                $name {
                    rows: [$( self.column($i) ),+],
                }
            }

            /// `(-1)^(i + j)` times the determinant of `minor(i, j)`.
            pub fn cofactor(&self, i: usize, j: usize) -> T {
                let minor = self.minor_determinant(i, j);
                if (i + j) % 2 == 0 {
                    minor
                } else {
                    -minor
                }
            }

            /// Transpose of the cofactor matrix.
            pub fn adjugate(&self) -> Self {
                let mut adjugate = Self::zero();
                for i in 0..$dim {
                    for j in 0..$dim {
                        adjugate.rows[j][i] = self.cofactor(i, j);
                    }
                }
                adjugate
            }
        }

        impl<T: Real> $name<T> {
            /// Adjugate divided by the determinant.
            pub fn inverse(&self) -> Result<Self, MathError> {
                let det = self.determinant();
                if det == T::zero() {
                    return Err(MathError::SingularMatrix);
                }
                Ok(self.adjugate().map(|c| c / det))
            }
        }

        impl<T: Scalar> Default for $name<T> {
            fn default() -> Self {
                Self::identity()
            }
        }

        impl<T: Scalar> From<[[T; $dim]; $dim]> for $name<T> {
            fn from(elements: [[T; $dim]; $dim]) -> Self {
                $name {
                    rows: elements.map($row::from),
                }
            }
        }

        impl<T: Scalar> Index<usize> for $name<T> {
            type Output = $row<T>;
            fn index(&self, i: usize) -> &$row<T> {
                assert!(i < $dim, "row {} out of range for {}", i, stringify!($name));
                &self.rows[i]
            }
        }

        impl<T: Scalar> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, i: usize) -> &mut $row<T> {
                assert!(i < $dim, "row {} out of range for {}", i, stringify!($name));
                &mut self.rows[i]
            }
        }

        impl<T: Scalar> Neg for $name<T> {
            type Output = Self;
            fn neg(self) -> Self {
                self.map(|c| -c)
            }
        }

        impl<T: Scalar> Add for $name<T> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                $name {
                    rows: [$( self.rows[$i] + rhs.rows[$i] ),+],
                }
            }
        }

        impl<T: Scalar> Add<T> for $name<T> {
            type Output = Self;
            fn add(self, rhs: T) -> Self {
                self.map(|c| c + rhs)
            }
        }

        impl<T: Scalar> Sub for $name<T> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                $name {
                    rows: [$( self.rows[$i] - rhs.rows[$i] ),+],
                }
            }
        }

        impl<T: Scalar> Sub<T> for $name<T> {
            type Output = Self;
            fn sub(self, rhs: T) -> Self {
                self.map(|c| c - rhs)
            }
        }

        impl<T: Scalar> Mul<T> for $name<T> {
            type Output = Self;
            fn mul(self, rhs: T) -> Self {
                self.map(|c| c * rhs)
            }
        }

        impl<T: Scalar> Mul for $name<T> {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                let columns = [$( rhs.column($i) ),+];
                let mut product = Self::zero();
                for i in 0..$dim {
                    for j in 0..$dim {
                        product.rows[i][j] = self.rows[i].dot(columns[j]);
                    }
                }
                product
            }
        }

        impl<T: Scalar> Mul<$row<T>> for $name<T> {
            type Output = $row<T>;
            fn mul(self, rhs: $row<T>) -> $row<T> {
                $row::from([$( self.rows[$i].dot(rhs) ),+])
            }
        }

        impl<T: Scalar> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Scalar> AddAssign<T> for $name<T> {
            fn add_assign(&mut self, rhs: T) {
                *self = *self + rhs;
            }
        }

        impl<T: Scalar> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Scalar> SubAssign<T> for $name<T> {
            fn sub_assign(&mut self, rhs: T) {
                *self = *self - rhs;
            }
        }

        impl<T: Scalar> MulAssign for $name<T> {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl<T: Scalar> MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T: fmt::Display> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let rows = [$( self.rows[$i].to_string() ),+];
                write!(f, "{{{}}}", rows.join(","))
            }
        }
    };
}

generate_matrix!(Mat2, Vec2, 2, 0, 1);
generate_matrix!(Mat3, Vec3, 3, 0, 1, 2);
generate_matrix!(Mat4, Vec4, 4, 0, 1, 2, 3);

pub type Mat2f = Mat2<f32>;
pub type Mat2d = Mat2<f64>;
pub type Mat3f = Mat3<f32>;
pub type Mat3d = Mat3<f64>;
pub type Mat4f = Mat4<f32>;
pub type Mat4d = Mat4<f64>;
pub type Mat4i = Mat4<i32>;

/// Indices `0..dim` with `skip` removed, paired with their position in the smaller matrix.
fn kept(dim: usize, skip: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..dim).filter(move |&k| k != skip).enumerate()
}

impl<T: Scalar> Mat2<T> {
    pub fn new(row0: Vec2<T>, row1: Vec2<T>) -> Self {
        Mat2::from_rows([row0, row1])
    }

    pub fn determinant(&self) -> T {
        self[0].x * self[1].y - self[0].y * self[1].x
    }

    /// The 1x1 minor left after deleting row `i` and column `j`.
    pub fn minor(&self, i: usize, j: usize) -> T {
        assert!(i < 2 && j < 2, "minor ({}, {}) out of range for Mat2", i, j);
        self[1 - i][1 - j]
    }

    fn minor_determinant(&self, i: usize, j: usize) -> T {
        self.minor(i, j)
    }
}

impl<T: Scalar> Mat3<T> {
    pub fn new(row0: Vec3<T>, row1: Vec3<T>, row2: Vec3<T>) -> Self {
        Mat3::from_rows([row0, row1, row2])
    }

    /// Triple product expansion along the first row.
    pub fn determinant(&self) -> T {
        let m = &self.rows;
        let r1 = m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1]);
        let r2 = m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0]);
        let r3 = m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0]);
        r1 - r2 + r3
    }

    /// The 2x2 submatrix left after deleting row `i` and column `j`.
    pub fn minor(&self, i: usize, j: usize) -> Mat2<T> {
        assert!(i < 3 && j < 3, "minor ({}, {}) out of range for Mat3", i, j);
        let mut minor = Mat2::zero();
        for (mi, row) in kept(3, i) {
            for (mj, col) in kept(3, j) {
                minor[mi][mj] = self[row][col];
            }
        }
        minor
    }

    fn minor_determinant(&self, i: usize, j: usize) -> T {
        self.minor(i, j).determinant()
    }
}

impl<T: Scalar> Mat4<T> {
    pub fn new(row0: Vec4<T>, row1: Vec4<T>, row2: Vec4<T>, row3: Vec4<T>) -> Self {
        Mat4::from_rows([row0, row1, row2, row3])
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        let mut det = T::zero();
        for j in 0..4 {
            det += self[0][j] * self.cofactor(0, j);
        }
        det
    }

    /// The 3x3 submatrix left after deleting row `i` and column `j`.
    pub fn minor(&self, i: usize, j: usize) -> Mat3<T> {
        assert!(i < 4 && j < 4, "minor ({}, {}) out of range for Mat4", i, j);
        let mut minor = Mat3::zero();
        for (mi, row) in kept(4, i) {
            for (mj, col) in kept(4, j) {
                minor[mi][mj] = self[row][col];
            }
        }
        minor
    }

    fn minor_determinant(&self, i: usize, j: usize) -> T {
        self.minor(i, j).determinant()
    }

    /// Camera-to-world basis: columns are forward, left (`up × fwd`), up and the position.
    pub fn orient(pos: Point3<T>, fwd: Vec3<T>, up: Vec3<T>) -> Self {
        let left = up.cross(fwd);
        let (zero, one) = (T::zero(), T::one());
        Mat4::new(
            Vec4::new(fwd.x, left.x, up.x, pos.x),
            Vec4::new(fwd.y, left.y, up.y, pos.y),
            Vec4::new(fwd.z, left.z, up.z, pos.z),
            Vec4::new(zero, zero, zero, one),
        )
    }
}

impl<T: Real> Mat4<T> {
    /// World-to-camera matrix for a camera at `pos` looking at `target`.
    ///
    /// The camera looks down its -z axis. Fails if `pos == target` or `up` is parallel to
    /// the viewing direction.
    pub fn look_at(pos: Point3<T>, target: Point3<T>, up: Vec3<T>) -> Result<Self, MathError> {
        let fwd = (pos - target).normalized()?;
        let right = up.cross(fwd).normalized()?;
        let up = fwd.cross(right).normalized()?;
        let eye = Vec3::from(pos);
        let (zero, one) = (T::zero(), T::one());
        Ok(Mat4::new(
            right.to_vec4(-eye.dot(right)),
            up.to_vec4(-eye.dot(up)),
            fwd.to_vec4(-eye.dot(fwd)),
            Vec4::new(zero, zero, zero, one),
        ))
    }
}

impl<T: Scalar> Mul<Point3<T>> for Mat4<T> {
    type Output = Point3<T>;
    fn mul(self, rhs: Point3<T>) -> Point3<T> {
        Point3::from_homogeneous(self * rhs.to_homogeneous())
    }
}

impl<T: Scalar> Mul<Vec3<T>> for Mat4<T> {
    type Output = Vec3<T>;
    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        // w = 0, translation does not apply
        Vec3::from_vec4(self * rhs.to_vec4(T::zero()))
    }
}
