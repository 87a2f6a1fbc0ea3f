use crate::math::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4, Vector};
use proptest::prelude::*;

prop_compose! {
    pub fn vec3()(x in -100.0..100.0f64, y in -100.0..100.0f64, z in -100.0..100.0f64) -> Vec3<f64> {
        Vec3::new(x, y, z)
    }
}

prop_compose! {
    pub fn nonzero_vec3()(v in vec3().prop_filter("near-zero vector", |v| v.length() > 1e-3)) -> Vec3<f64> {
        v
    }
}

prop_compose! {
    pub fn int_vec3()(x in -1000..1000i64, y in -1000..1000i64, z in -1000..1000i64) -> Vec3<i64> {
        Vec3::new(x, y, z)
    }
}

prop_compose! {
    pub fn matrix_row2()(x in -10.0..10.0f64, y in -10.0..10.0f64) -> Vec2<f64> {
        Vec2::new(x, y)
    }
}

prop_compose! {
    pub fn matrix_row3()(x in -10.0..10.0f64, y in -10.0..10.0f64, z in -10.0..10.0f64) -> Vec3<f64> {
        Vec3::new(x, y, z)
    }
}

prop_compose! {
    pub fn matrix_row4()(xyz in matrix_row3(), w in -10.0..10.0f64) -> Vec4<f64> {
        xyz.to_vec4(w)
    }
}

prop_compose! {
    pub fn mat2()(rows in prop::array::uniform2(matrix_row2())) -> Mat2<f64> {
        Mat2::from_rows(rows)
    }
}

prop_compose! {
    pub fn mat3()(rows in prop::array::uniform3(matrix_row3())) -> Mat3<f64> {
        Mat3::from_rows(rows)
    }
}

prop_compose! {
    pub fn mat4()(rows in prop::array::uniform4(matrix_row4())) -> Mat4<f64> {
        Mat4::from_rows(rows)
    }
}

prop_compose! {
    pub fn invertible_mat4()(m in mat4().prop_filter("nearly singular", |m| m.determinant().abs() > 0.5)) -> Mat4<f64> {
        m
    }
}
