use super::*;
use serde_json::json;

fn at(key: &str) -> DocPath {
    DocPath::root().field(key)
}

#[test]
fn scalars_decode_by_kind() {
    assert_eq!(f64::decode(&json!(2.5), &at("x")), Ok(2.5));
    assert_eq!(f64::decode(&json!(3), &at("x")), Ok(3.0));
    assert_eq!(f32::decode(&json!(0.5), &at("x")), Ok(0.5));
    assert_eq!(bool::decode(&json!(true), &at("x")), Ok(true));
    assert_eq!(String::decode(&json!("hip"), &at("x")), Ok("hip".to_owned()));

    let err = f64::decode(&json!("1"), &at("x")).unwrap_err();
    assert_eq!(err, BindError::shape(&at("x"), "number"));
}

#[test]
fn vectors_require_exact_length() {
    let v = Vector3f::decode(&json!([1, 2, 3]), &at("v")).unwrap();
    assert_eq!(v, Vector3f::new(1.0, 2.0, 3.0));

    let err = Vector3f::decode(&json!([1, 2]), &at("v")).unwrap_err();
    assert_eq!(err.path(), &at("v"));
    assert!(err.to_string().contains("found 2"), "{err}");

    assert!(Vector3d::decode(&json!([1, 2, 3, 4]), &at("v")).is_err());
    assert!(Vector4f::decode(&json!([1, 2, 3]), &at("v")).is_err());
    assert!(SpatialVector::decode(&json!({"x": 1}), &at("v")).is_err());
}

#[test]
fn element_errors_point_at_the_element() {
    let err = Vector3d::decode(&json!([1, "two", 3]), &at("com")).unwrap_err();
    assert_eq!(err.path(), &at("com").index(2));

    let err = Matrix3d::decode(&json!([[1, 0, 0], [0, 1], [0, 0, 1]]), &at("E")).unwrap_err();
    assert_eq!(err.path(), &at("E").index(2));
}

#[test]
fn matrices_are_rows() {
    let m = Matrix3d::decode(&json!([[1, 2, 3], [4, 5, 6], [7, 8, 9]]), &at("m")).unwrap();
    assert_eq!(m[1], [4.0, 5.0, 6.0]);
    assert_eq!(m.encode(), json!([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]));

    let f = Matrix33f::decode(&Matrix33f::IDENTITY.encode(), &at("m")).unwrap();
    assert_eq!(f, Matrix33f::IDENTITY);
}

#[test]
fn f32_values_survive_encoding() {
    let v = Vector4f::new(0.1, 0.2, 0.3, 1.0);
    let back = Vector4f::decode(&v.encode(), &at("c")).unwrap();
    for i in 0..4 {
        assert!((back[i] - v[i]).abs() < 1e-7);
    }
}

#[test]
fn lists_decode_elementwise() {
    let v: Vec<f64> = Vec::decode(&json!([1, 2.5]), &at("l")).unwrap();
    assert_eq!(v, vec![1.0, 2.5]);

    let err = Vec::<f64>::decode(&json!([1, null]), &at("l")).unwrap_err();
    assert_eq!(err.path(), &at("l").index(2));
}

#[test]
fn member_treats_null_as_absent() {
    let obj = json!({"a": null, "b": 1});
    let obj = obj.as_object().unwrap();
    assert!(member(obj, "a").is_none());
    assert!(member(obj, "b").is_some());
    assert_eq!(field_or(obj, &DocPath::root(), "a", 7.0), Ok(7.0));
    assert_eq!(
        field_required::<f64>(obj, &DocPath::root(), "a"),
        Err(BindError::missing(&at("a")))
    );
}

#[test]
fn non_finite_numbers_are_stored_as_strings() {
    assert_eq!(f64::INFINITY.encode(), json!("inf"));
    assert_eq!(f64::NEG_INFINITY.encode(), json!("-inf"));
    assert_eq!(f64::NAN.encode(), json!("nan"));
    assert_eq!(f32::INFINITY.encode(), json!("inf"));

    assert_eq!(f64::decode(&json!("inf"), &at("x")), Ok(f64::INFINITY));
    assert_eq!(f64::decode(&json!("-inf"), &at("x")), Ok(f64::NEG_INFINITY));
    assert!(f64::decode(&json!("nan"), &at("x")).unwrap().is_nan());
    assert!(f64::decode(&json!("infinity"), &at("x")).is_err());

    let v = Vector3d::new(1.0, f64::INFINITY, -2.0);
    assert_eq!(Vector3d::decode(&v.encode(), &at("v")), Ok(v));
}
