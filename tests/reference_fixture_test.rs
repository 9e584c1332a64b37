use similarity_tsplib::{
    convert_matrix, convert_to_document, ConversionError, FullMatrixSerializer, ImageFileSource,
    SerializerConfig, SigmoidDistanceTransform, SimilarityMatrix,
};
use std::fs::File;
use tiff::encoder::{colortype, TiffEncoder};

const REFERENCE_PATH: &str = "tests/fixtures/excerpt-tsp.dat";

fn excerpt_matrix() -> SimilarityMatrix {
    SimilarityMatrix::from_rows(vec![
        vec![1.0, 0.001, 0.005],
        vec![0.001, 1.0, 0.002],
        vec![0.005, 0.002, 1.0],
    ])
    .expect("excerpt matrix is square")
}

fn excerpt_serializer() -> FullMatrixSerializer {
    FullMatrixSerializer::new(SerializerConfig {
        name: "excerpt".to_string(),
        ..SerializerConfig::default()
    })
}

#[test]
fn test_matches_reference_file_line_by_line() {
    let transform = SigmoidDistanceTransform::new(1000.0, 0.0, 1_000_000.0);
    let generated = convert_matrix(&excerpt_matrix(), &excerpt_serializer(), &transform)
        .expect("conversion succeeds");

    let reference = std::fs::read_to_string(REFERENCE_PATH).expect("reference file is readable");
    let generated_lines: Vec<&str> = generated.lines().collect();
    let reference_lines: Vec<&str> = reference.lines().collect();

    assert_eq!(generated_lines.len(), reference_lines.len());
    for (index, (generated, expected)) in generated_lines.iter().zip(&reference_lines).enumerate() {
        assert_eq!(generated, expected, "line {} differs", index);
    }
    assert_eq!(generated, reference);
}

#[test]
fn test_float_tiff_matches_reference_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inlier ratio matrix-excerpt.tif");
    let values: Vec<f32> = excerpt_matrix().as_slice().iter().map(|&v| v as f32).collect();
    TiffEncoder::new(File::create(&path).unwrap())
        .unwrap()
        .write_image::<colortype::Gray32Float>(3, 3, &values)
        .unwrap();

    let transform = SigmoidDistanceTransform::new(1000.0, 0.0, 1_000_000.0);
    let generated = convert_matrix(&ImageFileSource::new(&path), &excerpt_serializer(), &transform)
        .expect("conversion succeeds");

    let reference = std::fs::read_to_string(REFERENCE_PATH).expect("reference file is readable");
    assert_eq!(generated, reference);
}

#[test]
fn test_non_square_input_is_malformed() {
    let err = SimilarityMatrix::from_rows(vec![vec![1.0, 0.5, 0.2], vec![0.5, 1.0, 0.3]])
        .unwrap_err();
    assert!(matches!(err, ConversionError::MalformedMatrix(_)));

    let err = SimilarityMatrix::from_row_major(vec![1.0, 0.5, 0.5], 2).unwrap_err();
    assert!(matches!(err, ConversionError::MalformedMatrix(_)));
}

#[test]
fn test_failed_conversion_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.tsp");
    let matrix = SimilarityMatrix::from_rows(vec![vec![1.0, f64::NAN], vec![0.5, 1.0]]).unwrap();
    let transform = SigmoidDistanceTransform::new(1000.0, 0.0, 1_000_000.0);

    let result = convert_to_document(&matrix, &excerpt_serializer(), &transform)
        .and_then(|doc| doc.save_to_file(&path));

    assert!(matches!(result, Err(ConversionError::NonFiniteValue { row: 0, col: 1, .. })));
    assert!(!path.exists());
}
