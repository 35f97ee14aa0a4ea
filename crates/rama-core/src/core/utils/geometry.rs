use nalgebra::Point3;

/// Torsion angle in radians defined by four points, in (-π, π].
///
/// The angle is measured between the plane through `p1, p2, p3` and the plane
/// through `p2, p3, p4`, looking down the `p2 → p3` bond.
pub fn dihedral_angle(
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
    p4: &Point3<f64>,
) -> f64 {
    let b1 = p2 - p1;
    let b2 = p3 - p2;
    let b3 = p4 - p3;

    let n1 = b1.cross(&b2);
    let n2 = b2.cross(&b3);
    let m1 = n1.cross(&b2.normalize());

    let x = n1.dot(&n2);
    let y = m1.dot(&n2);
    (-y).atan2(x)
}

/// Same as [`dihedral_angle`], in degrees.
pub fn dihedral_angle_degrees(
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
    p4: &Point3<f64>,
) -> f64 {
    dihedral_angle(p1, p2, p3, p4).to_degrees()
}
