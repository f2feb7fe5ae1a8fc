use fast_image_convolve::{
    Kernel, KernelName, KernelParseError, BOX_BLUR, EDGE_DETECTION, GAUSSIAN_BLUR, IDENTITY,
    SHARPEN,
};

#[test]
fn parse_list_of_numbers() {
    let kernel = Kernel::parse("1,2,3,4,5,6,7,8,9").unwrap();
    assert_eq!(kernel.weights(), &[1., 2., 3., 4., 5., 6., 7., 8., 9.]);
    assert!(kernel.is_square());
    assert_eq!(kernel.side(), 3);
    assert_eq!(kernel.radius(), 1);
}

#[test]
fn parse_floats_and_spaces() {
    let kernel: Kernel = " 0.0625, -1.5e1 ,3".parse().unwrap();
    assert_eq!(kernel.weights(), &[0.0625, -15., 3.]);
    // Length is not validated by the parser.
    assert!(!kernel.is_square());
}

#[test]
fn parse_skips_empty_items() {
    let kernel = Kernel::parse("1,,2,").unwrap();
    assert_eq!(kernel.weights(), &[1., 2.]);
    assert!(Kernel::parse("").unwrap().is_empty());
}

#[test]
fn parse_invalid_token() {
    assert_eq!(
        Kernel::parse("1,x,3"),
        Err(KernelParseError::InvalidToken {
            position: 1,
            token: "x".to_owned()
        })
    );
    assert!(Kernel::parse("1,2;3").is_err());
}

#[test]
fn predefined_kernels() {
    for kernel in [IDENTITY, GAUSSIAN_BLUR, EDGE_DETECTION, BOX_BLUR, SHARPEN] {
        assert_eq!(kernel.len(), 9);
        assert!(kernel.is_square());
    }
    assert_eq!(GAUSSIAN_BLUR.sum(), 1.0);
    assert_eq!(EDGE_DETECTION.sum(), 0.0);
    assert_eq!(SHARPEN.sum(), 1.0);
    assert_eq!(IDENTITY, SHARPEN);
    assert!((BOX_BLUR.sum() - 0.9999).abs() < 1e-5);
}

#[test]
fn kernel_names() {
    for name in KernelName::ALL {
        assert_eq!(name.name().parse::<KernelName>(), Ok(name));
        assert_eq!(name.to_string(), name.name());
    }
    assert_eq!("Gaussian_Blur".parse(), Ok(KernelName::GaussianBlur));
    assert_eq!(KernelName::EdgeDetection.kernel(), EDGE_DETECTION);
    assert_eq!(
        "emboss".parse::<KernelName>(),
        Err(KernelParseError::UnknownKernelName("emboss".to_owned()))
    );
}
