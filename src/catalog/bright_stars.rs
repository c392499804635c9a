/// named stars as (name, right ascension hours, declination degrees, visual magnitude), J2000
pub const BRIGHT_STARS: &[(&str, f64, f64, f64)] = &[
    ("Sirius", 6.7525, -16.7161, -1.46),
    ("Canopus", 6.3992, -52.6957, -0.74),
    ("Rigil Kentaurus", 14.6600, -60.8340, -0.27),
    ("Arcturus", 14.2610, 19.1824, -0.05),
    ("Vega", 18.6156, 38.7837, 0.03),
    ("Capella", 5.2782, 45.9980, 0.08),
    ("Rigel", 5.2423, -8.2016, 0.13),
    ("Procyon", 7.6550, 5.2250, 0.34),
    ("Achernar", 1.6286, -57.2368, 0.46),
    ("Betelgeuse", 5.9195, 7.4071, 0.50),
    ("Hadar", 14.0637, -60.3730, 0.61),
    ("Altair", 19.8464, 8.8683, 0.76),
    ("Acrux", 12.4433, -63.0991, 0.76),
    ("Aldebaran", 4.5987, 16.5093, 0.86),
    ("Antares", 16.4901, -26.4320, 0.96),
    ("Spica", 13.4199, -11.1613, 0.97),
    ("Pollux", 7.7553, 28.0262, 1.14),
    ("Fomalhaut", 22.9608, -29.6222, 1.16),
    ("Deneb", 20.6905, 45.2803, 1.25),
    ("Mimosa", 12.7954, -59.6888, 1.25),
    ("Regulus", 10.1395, 11.9672, 1.35),
    ("Adhara", 6.9771, -28.9721, 1.50),
    ("Castor", 7.5767, 31.8883, 1.58),
    ("Shaula", 17.5602, -37.1038, 1.62),
    ("Gacrux", 12.5194, -57.1132, 1.63),
    ("Bellatrix", 5.4189, 6.3497, 1.64),
    ("Elnath", 5.4382, 28.6075, 1.65),
    ("Miaplacidus", 9.2200, -69.7172, 1.67),
    ("Alnilam", 5.6036, -1.2019, 1.69),
    ("Alnair", 22.1372, -46.9610, 1.74),
    ("Alnitak", 5.6793, -1.9426, 1.77),
    ("Alioth", 12.9005, 55.9598, 1.77),
    ("Dubhe", 11.0621, 61.7510, 1.79),
    ("Mirfak", 3.4054, 49.8612, 1.79),
    ("Polaris", 2.5302, 89.2641, 1.98),
    ("Saiph", 5.7959, -9.6696, 2.09),
    ("Mizar", 13.3988, 54.9254, 2.23),
    ("Mintaka", 5.5334, -0.2991, 2.23),
    ("Schedar", 0.6751, 56.5373, 2.24),
    ("Merak", 11.0307, 56.3824, 2.37),
];
