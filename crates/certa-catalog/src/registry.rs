//! The Jiangxi province outpatient chronic/special disease recognition
//! standards: 67 admission rules.
//!
//! Criterion texts and published logic descriptions are kept verbatim in
//! the insurer's language. Criterion ids restart at "1" for every disease.

use crate::disease::{Criterion, Disease};
use crate::rule::Rule;

fn disease(
    id: u32,
    name: &str,
    category: &str,
    logic_description: &str,
    criteria: &[(&str, &str)],
    rule: Rule,
) -> Disease {
    Disease {
        id,
        name: name.to_string(),
        category: category.to_string(),
        criteria: criteria
            .iter()
            .map(|(id, description)| Criterion {
                id: id.to_string(),
                description: description.to_string(),
            })
            .collect(),
        rule,
        logic_description: logic_description.to_string(),
    }
}

/// All diseases of the built-in catalog, in published order.
pub fn jiangxi_diseases() -> Vec<Disease> {
    vec![
        disease(
            1,
            "1. 恶性肿瘤门诊治疗（含白血病）",
            "肿瘤",
            "(1) + (2) + [(3) 或 (4) 任一项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "近二年内的放疗、化疗、手术治疗等抗肿瘤治疗记录 1 次或对症姑息治疗记录 1 次"),
                ("3", "病理报告、细胞学阳性检查或二级及以上医疗机构诊断恶性肿瘤的影像学报告单（CT 或 MRI）"),
                ("4", "其他与病种相关材料（CT、核磁共振、同位素、内窥镜）"),
            ],
            Rule::and(vec![
                Rule::all(&["1", "2"]),
                Rule::any(&["3", "4"]),
            ]),
        ),
        disease(
            2,
            "2. 系统性红斑狼疮",
            "风湿免疫",
            "(1) + (2) + [(3)(4)(5)(6) 中任意两项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "系统受损相关检查报告单"),
                ("3", "抗核型贫血（白细胞减少、血小板减少）的血象报告单"),
                ("4", "尿蛋白或管型尿阳性报告单"),
                ("5", "抗核抗体阳性报告单"),
                ("6", "近二年内的相关免疫学阳性检查报告单"),
            ],
            Rule::and(vec![
                Rule::all(&["1", "2"]),
                Rule::at_least(2, &["3", "4", "5", "6"]),
            ]),
        ),
        disease(
            3,
            "3. 地中海贫血（含输血）",
            "血液系统",
            "(1) + [(2)(3)(4) 中任意一项]",
            &[
                ("1", "二级以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "具有小细胞低色素贫血的血常规报告"),
                ("3", "地中海贫血基因检测阳性检查报告"),
                ("4", "其他与疾病相关的近期肝功能（含黄疸指数）、肝脾 B 超、骨髓细胞学等检查报告"),
            ],
            Rule::and(vec![
                Rule::all(&["1"]),
                Rule::any(&["2", "3", "4"]),
            ]),
        ),
        disease(
            4,
            "4. 再生障碍性贫血",
            "血液系统",
            "(1) + [(2)(3) 中任意一项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "骨髓细胞学检查或骨髓活检报告单"),
                ("3", "一次及以上二、三系血细胞减少"),
            ],
            Rule::and(vec![
                Rule::all(&["1"]),
                Rule::any(&["2", "3"]),
            ]),
        ),
        disease(
            5,
            "5. 血友病",
            "血液系统",
            "(1) + (2) + (3) + [(4)(5) 中任意一项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "凝血因子测定异常"),
                ("3", "凝血报告提示凝血时间延长、凝血酶源消耗不良"),
                ("4", "实验室全套：PT、APTT、TT 报告单"),
                ("5", "脏器或关节出血（畸变）的相关材料"),
            ],
            Rule::and(vec![
                Rule::all(&["1", "2", "3"]),
                Rule::any(&["4", "5"]),
            ]),
        ),
        disease(
            6,
            "6. 帕金森氏综合症",
            "神经系统",
            "(1) + (2) + (3)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "有服用多巴胺类药物史"),
                ("3", "病史一年以上，有 3 次门诊或 1 次住院病历记录"),
            ],
            Rule::all(&["1", "2", "3"]),
        ),
        disease(
            7,
            "7. 慢性肾功能衰竭（尿毒症期）",
            "肾脏病",
            "(1) + [(2)(3)(4) 中任意一项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "2 次以上的肾功能检查报告单（肾小球滤过率≤15ml/分或血肌酐≥707μmol/L）"),
                ("3", "门诊（住院）的腹透或血透治疗记录单"),
                ("4", "与病种相关的其他检查资料"),
            ],
            Rule::and(vec![
                Rule::all(&["1"]),
                Rule::any(&["2", "3", "4"]),
            ]),
        ),
        disease(
            8,
            "8. 器官移植抗排异治疗",
            "器官移植",
            "(1) + [(2)(3) 中任意一项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "近二年内的 2 次连续服用抗排斥药物治疗记录"),
                ("3", "其他与病种相关的检查化验材料"),
            ],
            Rule::and(vec![
                Rule::all(&["1"]),
                Rule::any(&["2", "3"]),
            ]),
        ),
        disease(
            9,
            "9. 耐多药肺结核",
            "传染病",
            "(1) + [(2)(3) 中任意一项] (注：与结核病不同时享受)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "有 2 种或以上抗结核药耐药试验阳性"),
                ("3", "经定点医院证实利福平耐药，需门诊长期治疗，且既往有结核住院病史"),
            ],
            Rule::and(vec![
                Rule::all(&["1"]),
                Rule::any(&["2", "3"]),
            ]),
        ),
        disease(
            10,
            "10. 重性精神病",
            "精神卫生",
            "(1) + (2) + (3)",
            &[
                ("1", "专科医院或三甲综合医院出具并由2名副主任医师以上签署的“出院小结”或“疾病诊断证明书”"),
                ("2", "有重性精神病诊断、检查、治疗材料，病程 2 年以上"),
                ("3", "符合重性精神病界定条件（精神分裂症、心境障碍、器质性精神障碍等）"),
            ],
            Rule::all(&["1", "2", "3"]),
        ),
        disease(
            11,
            "11. 儿童生长激素缺乏症",
            "内分泌",
            "(1) + (2) + (3) + (4) + (5)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "初次诊断病历记录"),
                ("3", "治疗前 X 线腕骨片报告单符合骨龄落后 1 年以上"),
                ("4", "近二年内分泌测试阳性结果"),
                ("5", "符合生长激素缺乏诊断的其他检查材料（如身高≤-2SD或IGF-1低下）"),
            ],
            Rule::all(&["1", "2", "3", "4", "5"]),
        ),
        disease(
            12,
            "12. 高血压伴有并发症",
            "心脑血管",
            "(1) + (2) + [(3)至(7) 中任意一项]",
            &[
                ("1", "二级及以上医疗机构出具的证明，明确为高血压 2 级及以上"),
                ("2", "有治疗高血压的门诊记录 3 次或住院病历记录 1 次"),
                ("3", "近二年内显示心脏左室肥厚或心脏扩大或心功能不全"),
                ("4", "近二年内显示脑出血或脑梗塞的相关检查"),
                ("5", "近二年内显示肾功能不全的相关检查"),
                ("6", "近二年内显示眼底病变的相关检查"),
                ("7", "近二年内显示动脉硬化、增厚或狭窄的相关检查"),
            ],
            Rule::and(vec![
                Rule::all(&["1", "2"]),
                Rule::any(&["3", "4", "5", "6", "7"]),
            ]),
        ),
        disease(
            13,
            "13. 冠心病",
            "心脑血管",
            "[(1)+(2)] 或 [(1)+(3)+(4)]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "冠状动脉造影显示有冠脉狭窄"),
                ("3", "心电图 ST、T 明显缺血性改变或负荷运动试验阳性"),
                ("4", "有心肌梗死住院病历记录"),
            ],
            Rule::or(vec![
                Rule::all(&["1", "2"]),
                Rule::all(&["1", "3", "4"]),
            ]),
        ),
        disease(
            14,
            "14. 慢性心力衰竭",
            "心脑血管",
            "(1) + (2) + (3)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”（不能以疾病诊断证明书代替）"),
                ("2", "检查结果提示心脏病变（心电图、X线、造影、超声等）"),
                ("3", "近二年内心脏彩超提示心脏舒缩异常"),
            ],
            Rule::all(&["1", "2", "3"]),
        ),
        disease(
            15,
            "15. 心肌病",
            "心脑血管",
            "(1) + (7) + [(2)至(6) 中任意两项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "心脏超声检查提示心肌肥厚或心脏扩大"),
                ("3", "心电图检测显示心律失常"),
                ("4", "出现充血性心力衰竭症状"),
                ("5", "肌酶谱检查显示心肌受损"),
                ("6", "其他影像和实验室检查能提示心肌病的"),
                ("7", "近二年内 3 次门诊或 1 次住院记录"),
            ],
            Rule::and(vec![
                Rule::all(&["1", "7"]),
                Rule::at_least(2, &["2", "3", "4", "5", "6"]),
            ]),
        ),
        disease(
            16,
            "16. 糖尿病伴有并发症",
            "内分泌",
            "(1) + (2) + (3)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "近一年内 3 次使用降糖药或胰岛素的门诊记录或 1 次住院病历记录"),
                ("3", "提供肾功能报告单或眼底造影或肌电图或神经检查阳性报告单"),
            ],
            Rule::all(&["1", "2", "3"]),
        ),
        disease(
            17,
            "17. 慢性支气管炎",
            "呼吸系统",
            "(1) + (4) + [(2)(3) 中任意一项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "近二年内的影像阳性报告单"),
                ("3", "痰检阳性报告单"),
                ("4", "两年以上病程，3 次门诊或 1 次住院记录"),
            ],
            Rule::and(vec![
                Rule::all(&["1", "4"]),
                Rule::any(&["2", "3"]),
            ]),
        ),
        disease(
            18,
            "18. 慢性阻塞性肺疾病",
            "呼吸系统",
            "(1) + [(2)(3)(4) 中任意一项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "近二年内的肺功能阳性报告单"),
                ("3", "近二年内的胸片阳性报告单"),
                ("4", "近二年内的 CT 阳性报告单"),
            ],
            Rule::and(vec![
                Rule::all(&["1"]),
                Rule::any(&["2", "3", "4"]),
            ]),
        ),
        disease(
            19,
            "19. 支气管哮喘",
            "呼吸系统",
            "(1) + (2) + (3)",
            &[
                ("1", "二级及以上医疗机构出具的近 3 年“出院小结”或“疾病诊断证明书”"),
                ("2", "半年以上 3 次门诊或 1 次住院记录"),
                ("3", "支气管舒张试验、激发试验、运动试验阳性或昼夜 PEF 变异率≥20%"),
            ],
            Rule::all(&["1", "2", "3"]),
        ),
        disease(
            20,
            "20. 癫痫",
            "神经系统",
            "(1) + [(2)(3) 中任意一项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”（不能以疾病诊断证明书代替）"),
                ("2", "半年以上 3 次门诊或 1 次住院治疗记录"),
                ("3", "脑电图检查阳性报告单"),
            ],
            Rule::and(vec![
                Rule::all(&["1"]),
                Rule::any(&["2", "3"]),
            ]),
        ),
        disease(
            21,
            "21. 脑卒中",
            "神经系统",
            "(1) + (2) + (3)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”（不能以疾病诊断证明书代替）"),
                ("2", "至少一次脑 CT 或 MRI 检查报告单（明确显示有出血或梗塞）"),
                ("3", "住院治疗出院后 3 个月以上仍有未恢复的明显后遗症（运动、语言、智力障碍等）"),
            ],
            Rule::all(&["1", "2", "3"]),
        ),
        disease(
            22,
            "22. 重症肌无力",
            "神经系统",
            "(1) + [(2)(3)(4)(5) 中任意一项]",
            &[
                ("1", "三级医疗机构出具的“出院小结”（不能以疾病诊断证明书代替）"),
                ("2", "肌电图异常报告或重频电制激异常"),
                ("3", "病理诊断提示肌纤维改变、神经肌肉接头处改变、胸腺病变"),
                ("4", "血清自身抗体阳性报告单"),
                ("5", "其他辅助实验阳性报告单（肌疲劳实验、腾喜龙试验等）"),
            ],
            Rule::and(vec![
                Rule::all(&["1"]),
                Rule::any(&["2", "3", "4", "5"]),
            ]),
        ),
        disease(
            23,
            "23. 慢性肝炎",
            "传染病",
            "(1) + (2) + (3)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "近二年内 3 次门诊或 1 次住院治疗病历记录"),
                ("3", "病毒性肝炎阳性检查报告 2 次并有一次核酸检查阳性"),
            ],
            Rule::all(&["1", "2", "3"]),
        ),
        disease(
            24,
            "24. 肝硬化",
            "消化系统",
            "(1) + (2)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "肝硬化影像学检查阳性报告"),
            ],
            Rule::all(&["1", "2"]),
        ),
        disease(
            25,
            "25. 慢性肾脏病",
            "肾脏病",
            "(1) + (6) + [(2)(3)(4)(5) 中任意一项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "2 次以上的尿检异常（血尿、蛋白尿、管型尿）"),
                ("3", "有水肿及高血压病史"),
                ("4", "肾功能受损或肾功能衰竭（CKD G2-G4 分期）的检查报告单"),
                ("5", "肾活检病理检查阳性报告单"),
                ("6", "半年以上的累计 3 次门诊或 1 次住院病历记录"),
            ],
            Rule::and(vec![
                Rule::all(&["1", "6"]),
                Rule::any(&["2", "3", "4", "5"]),
            ]),
        ),
        disease(
            26,
            "26. 结核",
            "传染病",
            "(1) + (2) + (3)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "结核菌病原性检测阳性报告"),
                ("3", "近一年内服用抗结核药物记录"),
            ],
            Rule::all(&["1", "2", "3"]),
        ),
        disease(
            27,
            "27. 精神病",
            "精神卫生",
            "(1) + (2) + (3)",
            &[
                ("1", "专科或三甲医院主治医师以上出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "连续一年以上 3 次门诊或 1 次住院治疗精神病病历"),
                ("3", "排除其他器质性、症状性、中毒性等所致的应急性精神症状"),
            ],
            Rule::all(&["1", "2", "3"]),
        ),
        disease(
            28,
            "28. 心房颤动",
            "心脑血管",
            "(1) + (2) + (3)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "至少两次心电图提示房颤或 24 小时动态心电图提示房颤"),
                ("3", "近二年来 3 次门诊或 1 次住院病历"),
            ],
            Rule::all(&["1", "2", "3"]),
        ),
        disease(
            29,
            "29. 儿童孤独症",
            "精神卫生",
            "(1)",
            &[
                ("1", "三级甲等医疗机构出具的“出院小结”或“疾病诊断证明书”"),
            ],
            Rule::all(&["1"]),
        ),
        disease(
            30,
            "30. 克罗恩病",
            "消化系统",
            "(1) + [(2)(3) 中任意一项]",
            &[
                ("1", "三级甲等医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "肠镜检查或 CT、X 线报告提示克罗恩病"),
                ("3", "病理结果（内镜活检或手术标本）提示克罗恩病"),
            ],
            Rule::and(vec![
                Rule::all(&["1"]),
                Rule::any(&["2", "3"]),
            ]),
        ),
        disease(
            31,
            "31. 强直性脊柱炎",
            "风湿免疫",
            "(1) + [(2)(3)(4)(5) 中任意两项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "骶髂关节影像学检查阳性报告单（关节炎II~IV级）"),
                ("3", "血液检查血小板升高、贫血、血沉增快或 C 反应蛋白升高"),
                ("4", "HLA-B27 基因检测阳性"),
                ("5", "影像检查病变部位阳性报告单"),
            ],
            Rule::and(vec![
                Rule::all(&["1"]),
                Rule::at_least(2, &["2", "3", "4", "5"]),
            ]),
        ),
        disease(
            32,
            "32. 重度骨质疏松症",
            "骨科",
            "(1) + [(2)(3)(4) 中任意一项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "DXA 测定 T 值≤-2.5 且伴有脆性骨折"),
                ("3", "无脆性骨折，但 DXA 测定 T 值≤-3.0"),
                ("4", "QCT 腰椎骨密度≤80mg/cm3"),
            ],
            Rule::and(vec![
                Rule::all(&["1"]),
                Rule::any(&["2", "3", "4"]),
            ]),
        ),
        disease(
            33,
            "33. 阿尔茨海默病",
            "神经系统",
            "(1) + [(2)(3)(4)(5) 任意两项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "脑部 CT 或 MRI 检查，显示脑室增大及脑沟变宽或脑萎缩"),
                ("3", "一年以上老年痴呆病史"),
                ("4", "六个月以上 3 次门诊或 1 次住院病历记录"),
                ("5", "通过神经系统检查及脑电图、CT 检查排除其他原因痴呆"),
            ],
            Rule::and(vec![
                Rule::all(&["1"]),
                Rule::at_least(2, &["2", "3", "4", "5"]),
            ]),
        ),
        disease(
            34,
            "34. 类风湿性关节炎",
            "风湿免疫",
            "(1) + (2) + [(3)(4) 中任意一项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "影像学检查提示皮下结节或关节骨质破坏、滑膜增生等关节异常改变"),
                ("3", "实验室检查类风湿因子阳性（滴度>1:20）"),
                ("4", "其他辅助实验室检查阳性（ADF, CCP, AKA等）"),
            ],
            Rule::and(vec![
                Rule::all(&["1", "2"]),
                Rule::any(&["3", "4"]),
            ]),
        ),
        disease(
            35,
            "35. 青光眼",
            "眼科",
            "(1) + (2)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "青光眼相关检查（视野、视神经 OCT、眼底照相的 C/D 比值）"),
            ],
            Rule::all(&["1", "2"]),
        ),
        disease(
            36,
            "36. 骨关节炎",
            "骨科",
            "(1) + (2) + (3)",
            &[
                ("1", "二级及以上医疗机构出具“出院小结”或“疾病诊断证明书”"),
                ("2", "住院病历或半年以上的 3 次门诊病历，有明确诊断"),
                ("3", "影像学表现：骨质增生、关节间隙变窄、软骨下骨硬化等（软骨下骨质致密为必须条件）"),
            ],
            Rule::all(&["1", "2", "3"]),
        ),
        disease(
            37,
            "37. 儿童脑瘫",
            "神经系统",
            "(1) + (2)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "年龄≤14 岁，需长期门诊康复治疗"),
            ],
            Rule::all(&["1", "2"]),
        ),
        disease(
            38,
            "38. 肝豆状核变性",
            "内分泌",
            "(1) + [(2)(3)(4) 中任意一项]",
            &[
                ("1", "三级医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "具有锥体外系症状、K-F 环阳性、血清 CP 低于正常及尿铜升高"),
                ("3", "具有肝病症状，K-F 环阳性、血清 CP 低于正常及尿铜升高"),
                ("4", "基因诊断阳性"),
            ],
            Rule::and(vec![
                Rule::all(&["1"]),
                Rule::any(&["2", "3", "4"]),
            ]),
        ),
        disease(
            39,
            "39. 慢性心律失常",
            "心脑血管",
            "(1) + [(2)(3)(4) 中任意一项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "室性早搏＞10000/24 小时或室性早搏数＞10% 24 小时心搏数"),
                ("3", "室速或室颤"),
                ("4", "需要安装心脏起搏器的缓慢性心律失常"),
            ],
            Rule::and(vec![
                Rule::all(&["1"]),
                Rule::any(&["2", "3", "4"]),
            ]),
        ),
        disease(
            40,
            "40. 慢性萎缩性胃炎",
            "消化系统",
            "(1) + (2)",
            &[
                ("1", "三级医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "三级医疗机构病理提示有胃粘膜中度以上萎缩或肠化"),
            ],
            Rule::all(&["1", "2"]),
        ),
        disease(
            41,
            "41. 系统性硬皮病",
            "风湿免疫",
            "(1) + [(2)(3)(4) 任意一项]",
            &[
                ("1", "三甲医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "X 光检查：肺纤维化、食道运动功能障碍等内脏改变"),
                ("3", "肺动脉高压或肾脏病变"),
                ("4", "免疫学检测：抗 Scl-70（+），抗着丝点抗体（+）或抗核抗体（+）"),
            ],
            Rule::and(vec![
                Rule::all(&["1"]),
                Rule::any(&["2", "3", "4"]),
            ]),
        ),
        disease(
            42,
            "42. 运动神经元病（肌萎缩侧索硬化）",
            "神经系统",
            "(1)",
            &[
                ("1", "三级甲等医疗机构神经内科专科出具的“出院小结”和“疾病诊断证明书”（两者必不可少）"),
            ],
            Rule::all(&["1"]),
        ),
        disease(
            43,
            "43. 多发性肌炎",
            "风湿免疫",
            "(1) + (2)",
            &[
                ("1", "三级甲等医疗机构神经内科专科出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "具备肌炎特异性抗体阳性"),
            ],
            Rule::all(&["1", "2"]),
        ),
        disease(
            44,
            "44. 慢性骨髓炎",
            "骨科",
            "(1) + (2) + (3) + (4)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "提供急性骨髓炎或开放性骨折病史记录"),
                ("3", "X 线及其他影像学检测阳性报告"),
                ("4", "病变部位病历及实验室检查阳性报告"),
            ],
            Rule::all(&["1", "2", "3", "4"]),
        ),
        disease(
            45,
            "45. 甲状腺功能减退症",
            "内分泌",
            "(1) + (2) + (3)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "血清甲状腺激素测定水平低于正常值+促甲状腺素（TSH）升高"),
                ("3", "3 个月以上的 3 次门诊诊疗记录"),
            ],
            Rule::all(&["1", "2", "3"]),
        ),
        disease(
            46,
            "46. 甲状腺功能亢进症",
            "内分泌",
            "(1) + (2) + (3)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”（排除特定禁忌症）"),
                ("2", "二甲以上医疗机构甲状腺素测定（T3、T4、FT3、FT4、TSH）提示甲亢"),
                ("3", "3 个月以上 3 次门诊诊疗记录"),
            ],
            Rule::all(&["1", "2", "3"]),
        ),
        disease(
            47,
            "47. 骨髓增生异常综合征",
            "血液系统",
            "(1) + [(2)(3)(4) 中任意一项]",
            &[
                ("1", "三级甲等医疗机构血液科专科出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "至少三次以上血象提示持续（≥6 月）一系或多系血细胞减少"),
                ("3", "骨髓实验室检测提示异常（原始细胞、染色体等）"),
                ("4", "其他辅助检查：流式细胞术、基因芯片、CFU集落形成减少等"),
            ],
            Rule::and(vec![
                Rule::all(&["1"]),
                Rule::any(&["2", "3", "4"]),
            ]),
        ),
        disease(
            48,
            "48. 血小板减少性紫癜",
            "血液系统",
            "(1) + (2) + (3) + (4)",
            &[
                ("1", "二级及以上医疗机构出具“出院小结”或“疾病诊断证明书”"),
                ("2", "至少三次以上检查血小板低于正常值"),
                ("3", "影像学检查脾脏不增大或仅轻度增大"),
                ("4", "骨髓检查巨核细胞正常增多，有成熟障碍"),
            ],
            Rule::all(&["1", "2", "3", "4"]),
        ),
        disease(
            49,
            "49. 消化性溃疡",
            "消化系统",
            "(1) + (4) + [(2)(3) 中任意一项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "内镜检查阳性报告"),
                ("3", "X 线钡餐检查阳性报告单"),
                ("4", "近一年的 3 次门诊治疗记录"),
            ],
            Rule::and(vec![
                Rule::all(&["1", "4"]),
                Rule::any(&["2", "3"]),
            ]),
        ),
        disease(
            50,
            "50. 子宫内膜异位症",
            "妇科",
            "(1) + (2)",
            &[
                ("1", "三级甲等医疗机构妇产科出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "临床病理阳性材料"),
            ],
            Rule::all(&["1", "2"]),
        ),
        disease(
            51,
            "51. 溃疡性结肠炎",
            "消化系统",
            "(1) + (2)",
            &[
                ("1", "三级甲等医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "肠镜、病理及影像学的相关检查报告"),
            ],
            Rule::all(&["1", "2"]),
        ),
        disease(
            52,
            "52. 银屑病",
            "皮肤/风湿",
            "(1) + (2)",
            &[
                ("1", "三级甲等医疗机构出具的“出院小结”或“疾病诊断证明书”，明确为中重度"),
                ("2", "中重度寻常型银屑病或关节型、脓疱型或红皮病型，且对传统治疗无效/禁忌"),
            ],
            Rule::all(&["1", "2"]),
        ),
        disease(
            53,
            "53. 痛风",
            "风湿免疫",
            "(1) + (6) + [(2)(3)(4)(5) 中任意一项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "血尿酸测定男性>416μmol/L，女性>357μmol/L"),
                ("3", "血、尿常规及血沉提示异常"),
                ("4", "痛风关节 X 线等影像学检查阳性"),
                ("5", "痛风关节穿刺积液、结石实验室检测阳性"),
                ("6", "近三年 3 次门诊或 1 次住院治疗记录"),
            ],
            Rule::and(vec![
                Rule::all(&["1", "6"]),
                Rule::at_least(1, &["2", "3", "4", "5"]),
            ]),
        ),
        disease(
            54,
            "54. 艾滋病",
            "传染病",
            "(1) + (2)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "HIV 检测阳性报告单"),
            ],
            Rule::all(&["1", "2"]),
        ),
        disease(
            55,
            "55. 尘肺病",
            "呼吸系统",
            "(1) + (2) + (3) + (4) + (5)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "近三年内典型的 X 光或胸部 CT"),
                ("3", "结合临床表现，排除其他类似肺部疾病"),
                ("4", "连续一年以上的 3 次门诊或 1 次住院治疗资料"),
                ("5", "非工伤患者"),
            ],
            Rule::all(&["1", "2", "3", "4", "5"]),
        ),
        disease(
            56,
            "56. 肺部非结核分枝杆菌病",
            "传染病",
            "(1) (出院小结和诊断证明必不可少)",
            &[
                ("1", "三级甲等医疗机构出具的“出院小结”和“疾病诊断证明书”（两者必不可少）"),
            ],
            Rule::all(&["1"]),
        ),
        disease(
            57,
            "57. 颅内良性肿瘤辅助用药",
            "肿瘤",
            "(1) + (2)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "脑部 CT 或 MRI 提示良性脑瘤"),
            ],
            Rule::all(&["1", "2"]),
        ),
        disease(
            58,
            "58. 变应性亚败血症（成人 still 病）",
            "风湿免疫",
            "(1)",
            &[
                ("1", "三级甲等医疗机构风湿科出具的“出院小结”和“疾病诊断证明书”（两者必不可少）"),
            ],
            Rule::all(&["1"]),
        ),
        disease(
            59,
            "59. 股骨头坏死",
            "骨科",
            "(1) + (2)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "X 线、MRI 等影像学检查提示骨纹理细小或中断，囊肿、硬化、扁平或塌陷"),
            ],
            Rule::all(&["1", "2"]),
        ),
        disease(
            60,
            "60. 苯丙酮尿症",
            "内分泌",
            "(1)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
            ],
            Rule::all(&["1"]),
        ),
        disease(
            61,
            "61. 泌尿系结石",
            "泌尿系统",
            "(1) + (2)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "泌尿系 CT 诊断结石大于 0.4 厘米"),
            ],
            Rule::all(&["1", "2"]),
        ),
        disease(
            62,
            "62. 原发性慢性肾上腺皮质功能减退症",
            "内分泌",
            "(1) + (2) + [(3)(4) 中任意一项]",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "血、尿皮质醇水平测定低于正常值的检查报告"),
                ("3", "其他辅助检查报告（ACTH升高、兴奋试验异常、CT异常、抗体阳性等）"),
                ("4", "近二年内因艾迪生病的 3 次门诊或 1 次住院治疗记录"),
            ],
            Rule::and(vec![
                Rule::all(&["1", "2"]),
                Rule::any(&["3", "4"]),
            ]),
        ),
        disease(
            63,
            "63. 皮质醇增多症",
            "内分泌",
            "(1) + (2) + (3)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "实验室检测库欣综合征阳性报告（血清皮质醇、24hUFC、DST 等）"),
                ("3", "近二年内因库欣综合征的 3 次门诊或 1 次住院治疗记录"),
            ],
            Rule::all(&["1", "2", "3"]),
        ),
        disease(
            64,
            "64. 多发性硬化病",
            "神经系统",
            "(1) + [(2)(3)(4)(5) 中任意一项]",
            &[
                ("1", "三级甲等医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "近一年的 3 次门诊或 1 次住院治疗记录"),
                ("3", "影像学检查中枢神经系统多发性病灶"),
                ("4", "脑脊液检查存在自身免疫性炎症反应"),
                ("5", "电生理检查存在脱髓鞘病变异常"),
            ],
            Rule::and(vec![
                Rule::all(&["1"]),
                Rule::any(&["2", "3", "4", "5"]),
            ]),
        ),
        disease(
            65,
            "65. 血吸虫病",
            "传染病",
            "(1)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
            ],
            Rule::all(&["1"]),
        ),
        disease(
            66,
            "66. 肺动脉高压",
            "心脑血管",
            "(1) + (2) + (3) + (4)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "右心导管检查：静息平均肺动脉压≥25mmHg"),
                ("3", "超声心动图检查：肺动脉收缩压≥40 mmHg"),
                ("4", "胸片检查显示肺动脉高压症"),
            ],
            Rule::all(&["1", "2", "3", "4"]),
        ),
        disease(
            67,
            "67. 特发性肺间质纤维化",
            "呼吸系统",
            "(1) + (2) + (3)",
            &[
                ("1", "二级及以上医疗机构出具的“出院小结”或“疾病诊断证明书”"),
                ("2", "CT 报告单：提示典型特发性肺纤维化表现"),
                ("3", "肺功能报告：提示限制性通气功能障碍、弥散量降低"),
            ],
            Rule::all(&["1", "2", "3"]),
        ),
    ]
}
