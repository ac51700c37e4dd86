use crate::model::product::{Category, Product};

/// Products in publication order. Order decides which product owns a
/// filename when two of them slugify the same.
pub const PRODUCTS: &[Product] = &[
    Product::new("Nuclear energy crisis", "核能危机", Category::FamilyRide),
    Product::new("Energy Plan", "能源计划", Category::FamilyRide),
    Product::new("Star Nuclear Guard", "星核护卫队", Category::FamilyRide),
    Product::new("Meow Nuclear Team", "喵核战队", Category::FamilyRide),
    Product::new("SPATIOTEMPORAL EDDY CURRENT - Model 2", "时空涡流 - 型号2", Category::FamilyRide),
    Product::new("Stellar core ripples", "星核涟漪", Category::FamilyRide),
    Product::new("Star Nucleus Explorer - Model 2", "星核探险家 - 型号2", Category::FamilyRide),
    Product::new("Meow Nuclear Carousel", "星核旋转木马", Category::FamilyRide),
    Product::new("Galaxy Collision", "银河大碰撞", Category::FamilyRide),
    Product::new("Meow Nuclear Storm", "猫核风暴", Category::FamilyRide),
    Product::new("Super Warrior", "超能战士", Category::FamilyRide),
    Product::new("Star core jumping bed", "星核蹦乐床", Category::FamilyRide),
    Product::new("Future Engine", "未来引擎", Category::FamilyRide),
    Product::new("Rotating Matrix", "旋转矩阵", Category::FamilyRide),
    Product::new("MEOW NUCLEAR MECHA CAR", "喵核机甲车", Category::FamilyRide),
    Product::new("MEOW NUCLEAR MECHA CAR (Single)", "喵核机甲车（单座）", Category::FamilyRide),
    Product::new("Meow Core Train", "喵核小火车", Category::FamilyRide),
    Product::new("MEOW CORE TRAIN - Model 2", "喵核小火车 - 型号2", Category::FamilyRide),
    Product::new("Cat-core bumper cars", "Cat-core bumper cars", Category::FamilyRide),
    Product::new("Cobra bumper cars", "Cobra bumper cars", Category::FamilyRide),
    Product::new("Alien Invasion", "Alien Invasion", Category::FamilyRide),
    Product::new("Quantum Jump", "量子弹跳", Category::FamilyRide),
    Product::new("Pendulum Play", "玩转钟摆", Category::FamilyRide),
    Product::new("CrossFire", "穿越火线", Category::FamilyRide),
    Product::new("Nuclear Disco", "核能迪斯科", Category::FamilyRide),
    Product::new("RoboCop", "星际迷航", Category::FamilyRide),
    Product::new("Catnip Knight", "喵核骑士", Category::FamilyRide),
    Product::new("Nuclear Energy Crisis Flying Chair", "核能危机 空中飞椅", Category::FamilyRide),
    Product::new("MOUNTAINEER", "爬山车 MOUNTAINEER", Category::FamilyRide),
    Product::new("The Great Collision of Galaxies", "银河大碰撞- 碰碰车", Category::FamilyRide),
    Product::new("GLOBAL SPACE", "太空环球记 GLOBAL SPACE", Category::FamilyRide),
    Product::new("INTERSTELLAR MADNESS STATION", "星际疯狂站)", Category::FamilyRide),
    Product::new("MEOW NUCLEAR MECHA CAR (Single) - Model 2", "喵核机甲车（单座）- 型号2", Category::FamilyRide),
    Product::new("MEOW NUCLEAR MECHA CAR (Single) - Model 3", "喵核机甲车（单座）- 型号3", Category::FamilyRide),
    Product::new("MEOW CORE TRAIN - Model 3", "喵核小火车 - 型号3", Category::FamilyRide),
    Product::new("MEOW CORE TRAIN - Model 4", "喵核小火车 - 型号4", Category::FamilyRide),
    Product::new("POSEIDON", "海神号 POSEIDON", Category::WaterAttraction),
    Product::new("INTERSTELLAR", "穿越时空 INTERSTELLAR", Category::FamilyRide),
    Product::new("Quantum Jump - Model 2", "量子弹跳 - 型号2", Category::FamilyRide),
    Product::new("LUCKY CAROUSEL", "幸运转马", Category::FamilyRide),
    Product::new("ROMANTIC CAROUSEL", "浪漫拾光转马", Category::FamilyRide),
    Product::new("Astronaut Self-Control Aircraft", "宇航员自控飞机", Category::FamilyRide),
    Product::new("MOE DUCK LAND", "萌鸭乐园", Category::KiddieFun),
    Product::new("PET WARS CLIMBING CAR", "宠物作战儿童爬山车)", Category::KiddieFun),
    Product::new("MAGIC CASTLE WATER RAFTING", "童话城堡水道漂流", Category::WaterAttraction),
    Product::new("FANTASY STAR INTERNET CELEBRITY SWING", "梦幻星网红秋千", Category::FamilyRide),
    Product::new("OFF ROAD VEHICLE", "越野战车 OFF-ROAD VEHICLE", Category::FamilyRide),
    Product::new("Spinning Ferris Wheel", "旋转飞椅", Category::FamilyRide),
    Product::new("MOE DUCK LAND", "喷球车", Category::KiddieFun),
    Product::new("Rotating Matrix - Model 2", "旋转矩阵 - 型号2", Category::FamilyRide),
    Product::new("GLOBAL GLIDING", "环球滑翔", Category::FamilyRide),
    Product::new("PIRATE SHIP", "海盗船 PIRATE SHIP", Category::FamilyRide),
    Product::new("Interstellar Adventure Six-Person Trampoline", "星际探险六人蹦床", Category::FamilyRide),
    Product::new("MAGIC CASTLE WATER RAFTING", "打地鼠儿童单人蹦床", Category::FamilyRide),
    Product::new("KUPAO GO KART", "酷跑卡丁车)", Category::FamilyRide),
    Product::new("KODUCK MINI TRAIN", "哒哒鸭小火车)", Category::FamilyRide),
    Product::new("SPACE MINI TRAIN", "太空队小火车)", Category::FamilyRide),
    Product::new("WILD DRIFT BUMPER CAR", "狂飙漂移碰碰车", Category::FamilyRide),
    Product::new("TORNADO DRIFT BUMPER CAR", "旋风漂移碰碰车", Category::FamilyRide),
    Product::new("VICTORY DRIFT BUMPER CAR", "赛赢漂移碰碰车", Category::FamilyRide),
    Product::new("WIND DRIVEN DRIFT COLLISION CAR", "风驰漂移碰碰车", Category::FamilyRide),
    Product::new("MAIXUAN DRIFT COLLISION CAR", "MAIXUAN DRIFT COLLISION CAR", Category::FamilyRide),
    Product::new("TORNADO RACING CAR", "旋风飞车", Category::FamilyRide),
    Product::new("Q MOE RACING CAR", "萌飞车", Category::FamilyRide),
    Product::new("OFF ROAD TANK", "越野战车", Category::FamilyRide),
    Product::new("SUPER RACING CAR", "急速飞车", Category::FamilyRide),
    Product::new("BIG EYES RACING CAR", "大眼酷飞车", Category::FamilyRide),
    Product::new("Super Warrior - Model 2", "超能战士 - 型号2", Category::FamilyRide),
    Product::new("Pendulum Play - Model 2", "玩转钟摆 - 型号2", Category::FamilyRide),
];
