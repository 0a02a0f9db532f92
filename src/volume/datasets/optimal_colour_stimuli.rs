//! Optimal colour stimuli samples for the CIE 1931 2° standard observer.
//!
//! Each table holds CIE xyY samples of the square-pulse (block) reflectances
//! at 10 nm steps over 380 to 780 nm, luminance `Y` on a 0 to 100 scale with
//! the perfect reflecting diffuser at 100. Row 0 is black, the last row is
//! the perfect reflector; rows in between enumerate pulses by width, then by
//! start wavelength, wrapping around the spectrum ends.

#![allow(clippy::unreadable_literal, clippy::excessive_precision)]

/// Number of samples in every optimal colour stimuli table.
pub const OPTIMAL_COLOUR_STIMULI_SAMPLES: usize = 1642;

/// Optimal colour stimuli for illuminant A.
pub static ILLUMINANT_A_OPTIMAL_COLOUR_STIMULI: [[f64; 3]; OPTIMAL_COLOUR_STIMULI_SAMPLES] = [
    [0.4476020037, 0.4075365157, 0.0000000000],
    [0.1741122566, 0.0049637266, 0.0000354052],
    [0.1738008438, 0.0049154139, 0.0001344106],
    [0.1733368865, 0.0047967440, 0.0005398129],
    [0.1725765508, 0.0047993019, 0.0019821854],
    [0.1714074339, 0.0051021710, 0.0077833808],
    [0.1688775207, 0.0069002439, 0.0265238569],
    [0.1644117564, 0.0108575583, 0.0611849124],
    [0.1566409326, 0.0177048050, 0.1165251715],
    [0.1439603960, 0.0297029703, 0.2102688040],
    [0.1241184767, 0.0578025134, 0.3614809190],
    [0.0912935157, 0.1327020552, 0.6215827757],
    [0.0453907347, 0.2949759646, 1.0394249076],
    [0.0081680280, 0.5384230705, 1.7920103006],
    [0.0138702461, 0.7501864280, 3.0798011607],
    [0.0743024239, 0.8338030815, 4.7705112078],
    [0.1547220612, 0.8058635454, 6.3220214492],
    [0.2296196726, 0.7543290899, 7.5992806450],
    [0.3016038688, 0.6923076923, 8.5677377916],
    [0.3731015439, 0.6244508598, 9.2218143424],
    [0.4440624636, 0.5547139028, 9.4571303085],
    [0.5124863671, 0.4865907883, 9.2273394957],
    [0.5751513114, 0.4242322349, 8.5406530533],
    [0.6270365998, 0.3724911452, 7.5466850440],
    [0.6657635762, 0.3340106512, 6.3563021306],
    [0.6915039979, 0.3083422356, 5.0713988315],
    [0.7079177916, 0.2920271089, 3.7046291070],
    [0.7190329416, 0.2809349515, 2.5623072979],
    [0.7259923175, 0.2740076825, 1.6365655994],
    [0.7299690128, 0.2700309872, 0.9722052010],
    [0.7319932998, 0.2680067002, 0.5301936889],
    [0.7334169672, 0.2665830328, 0.2921598133],
    [0.7343901650, 0.2656098350, 0.1460432415],
    [0.7346872777, 0.2653127223, 0.0753748969],
    [0.7346783403, 0.2653216597, 0.0396138779],
    [0.7346680182, 0.2653319818, 0.0204132717],
    [0.7346938776, 0.2653061224, 0.0104157542],
    [0.7348242812, 0.2651757188, 0.0051155607],
    [0.7345132743, 0.2654867257, 0.0025246484],
    [0.7345132743, 0.2654867257, 0.0012907678],
    [0.7345132743, 0.2654867257, 0.0006589876],
    [0.7368421053, 0.2631578947, 0.0003359827],
    [0.1738652696, 0.0049254090, 0.0001698158],
    [0.1734275828, 0.0048199421, 0.0006742235],
    [0.1727393626, 0.0047987542, 0.0025219983],
    [0.1716565226, 0.0050376426, 0.0097655663],
    [0.1695962953, 0.0063893927, 0.0343072377],
    [0.1662226760, 0.0092528210, 0.0877087692],
    [0.1602253783, 0.0145463774, 0.1777100839],
    [0.1500697637, 0.0239223629, 0.3267939756],
    [0.1346535645, 0.0428830316, 0.5717497231],
    [0.1100613450, 0.0898778819, 0.9830636948],
    [0.0715866192, 0.2023691877, 1.6610076833],
    [0.0273104077, 0.4132264536, 2.8314352082],
    [0.0113171965, 0.6553737860, 4.8718114613],
    [0.0490553555, 0.7988701129, 7.8503123685],
    [0.1208065459, 0.8176465352, 11.0925326570],
    [0.1968295870, 0.7768908135, 13.9213020942],
    [0.2693014217, 0.7201393973, 16.1670184366],
    [0.3405033837, 0.6553890391, 17.7895521340],
    [0.4111254380, 0.5870828172, 18.6789446509],
    [0.4800933008, 0.5188414558, 18.6844698042],
    [0.5447555448, 0.4544793859, 17.7679925490],
    [0.6011761765, 0.3982796977, 16.0873380973],
    [0.6457940033, 0.3538531254, 13.9029871747],
    [0.6776967749, 0.3221108343, 11.4277009622],
    [0.6986513001, 0.3012378974, 8.7760279386],
    [0.7125667300, 0.2873877873, 6.2669364049],
    [0.7217868885, 0.2781937099, 4.1988728973],
    [0.7274879211, 0.2725120789, 2.6087708003],
    [0.7306868621, 0.2693131379, 1.5023988898],
    [0.7325008283, 0.2674991717, 0.8223535022],
    [0.7337421036, 0.2662578964, 0.4382030548],
    [0.7344913824, 0.2655086176, 0.2214181384],
    [0.7346841988, 0.2653158012, 0.1149887748],
    [0.7346748302, 0.2653251698, 0.0600271496],
    [0.7346767555, 0.2653232445, 0.0308290259],
    [0.7347368428, 0.2652631572, 0.0155313149],
    [0.7347215920, 0.2652784080, 0.0076402091],
    [0.7345132743, 0.2654867257, 0.0038154162],
    [0.7345132743, 0.2654867257, 0.0019497554],
    [0.7353042722, 0.2646957278, 0.0009949703],
    [0.2595460209, 0.0441628197, 0.0003713879],
    [0.1734608014, 0.0048269182, 0.0007096287],
    [0.1727918604, 0.0048045239, 0.0026564089],
    [0.1717487208, 0.0050244249, 0.0103053791],
    [0.1698091631, 0.0062758188, 0.0362894231],
    [0.1669414061, 0.0086774427, 0.0954921500],
    [0.1622961469, 0.0127163829, 0.2042339408],
    [0.1542582579, 0.0201068639, 0.3879788879],
    [0.1419202467, 0.0345617914, 0.6882748946],
    [0.1233807353, 0.0662343547, 1.1933324988],
    [0.0943034162, 0.1398529938, 2.0224886024],
    [0.0532897959, 0.2993236992, 3.4530179839],
    [0.0222748164, 0.5394743942, 5.9112363689],
    [0.0387107521, 0.7329763133, 9.6423226691],
    [0.0959638958, 0.8019747021, 14.1723338176],
    [0.1671761818, 0.7906644332, 18.6918133020],
    [0.2396304539, 0.7423381461, 22.4890398858],
    [0.3104889906, 0.6821704803, 25.3888327790],
    [0.3804548986, 0.6165501057, 27.2466824425],
    [0.4489777443, 0.5495549937, 27.9062841466],
    [0.5141790885, 0.4849165946, 27.2251228575],
    [0.5728409428, 0.4264939356, 25.3146775930],
    [0.6218605591, 0.3776972690, 22.4436402280],
    [0.6592823213, 0.3404235601, 18.9743860062],
    [0.6856567744, 0.3141869964, 15.1323300692],
    [0.7035107754, 0.2963971851, 11.3383352365],
    [0.7154533090, 0.2845109873, 7.9035020043],
    [0.7233627404, 0.2766215947, 5.1710780983],
    [0.7282595139, 0.2717404861, 3.1389644892],
    [0.7311351363, 0.2688648637, 1.7945587031],
    [0.7327874771, 0.2672125229, 0.9683967437],
    [0.7338812428, 0.2661187572, 0.5135779517],
    [0.7345197719, 0.2654802281, 0.2610320163],
    [0.7346817595, 0.2653182405, 0.1354020465],
    [0.7346776467, 0.2653223533, 0.0704429038],
    [0.7346977611, 0.2653022389, 0.0359445867],
    [0.7347056054, 0.2652943946, 0.0180559633],
    [0.7346915047, 0.2653084953, 0.0089309769],
    [0.7345132743, 0.2654867257, 0.0044744038],
    [0.7348581720, 0.2651418280, 0.0022857382],
    [0.3677896479, 0.0946018808, 0.0010303755],
    [0.1939683948, 0.0141465344, 0.0005057986],
    [0.1728086775, 0.0048065515, 0.0026918141],
    [0.1717757198, 0.0050229907, 0.0104397898],
    [0.1698765089, 0.0062475826, 0.0368292360],
    [0.1671452484, 0.0085371572, 0.0974743355],
    [0.1630864998, 0.0120558928, 0.2120173216],
    [0.1566867637, 0.0179130219, 0.4145027448],
    [0.1468809957, 0.0293335630, 0.7494598070],
    [0.1322798534, 0.0532497597, 1.3098576703],
    [0.1106225773, 0.1036535313, 2.2327574064],
    [0.0781885149, 0.2144206902, 3.8144989030],
    [0.0429434212, 0.4176607873, 6.5328191446],
    [0.0401220456, 0.6404390894, 10.6817475767],
    [0.0820493025, 0.7602049258, 15.9643441182],
    [0.1444925948, 0.7846751912, 21.7716144627],
    [0.2133671544, 0.7568678722, 27.2595510936],
    [0.2833713432, 0.7037043510, 31.7108542282],
    [0.3524532567, 0.6421279358, 34.8459630875],
    [0.4200990879, 0.5775281071, 36.4740219382],
    [0.4847987060, 0.5139755784, 36.4469371999],
    [0.5441055127, 0.4551047402, 34.7718079016],
    [0.5954004577, 0.4040410848, 31.6709797236],
    [0.6369581320, 0.3626622177, 27.5150390595],
    [0.6682994748, 0.3314507214, 22.6790151132],
    [0.6909708515, 0.3088926818, 17.6946373671],
    [0.7065468586, 0.2933735317, 12.9749008359],
    [0.7171187723, 0.2828496205, 8.8757072053],
    [0.7241886754, 0.2757971588, 5.7012717871],
    [0.7287064303, 0.2712935697, 3.4311243025],
    [0.7313828724, 0.2686171276, 1.9406019446],
    [0.7329255802, 0.2670744198, 1.0437716406],
    [0.7339384818, 0.2660615182, 0.5531918296],
    [0.7345305298, 0.2654694702, 0.2814452881],
    [0.7346826252, 0.2653173748, 0.1458178007],
    [0.7346875795, 0.2653124205, 0.0755584646],
    [0.7346856615, 0.2653143385, 0.0384692350],
    [0.7346927822, 0.2653072178, 0.0193467311],
    [0.7346792650, 0.2653207350, 0.0095899645],
    [0.7346772702, 0.2653227298, 0.0048103865],
    [0.4809683079, 0.1473405547, 0.0023211433],
    [0.2290588431, 0.0304627374, 0.0011647861],
    [0.1783113011, 0.0070510501, 0.0010456114],
    [0.1717837110, 0.0050227880, 0.0104751950],
    [0.1698946285, 0.0062414317, 0.0369636466],
    [0.1672056802, 0.0085006499, 0.0980141484],
    [0.1633042614, 0.0118893809, 0.2139995070],
    [0.1575972122, 0.0171206925, 0.4222861256],
    [0.1497575693, 0.0263998681, 0.7759836638],
    [0.1382689119, 0.0453482863, 1.3710425827],
    [0.1213924694, 0.0835385466, 2.3492825779],
    [0.0969108371, 0.1618397907, 4.0247677070],
    [0.0661287319, 0.3148776622, 6.8943000636],
    [0.0513419801, 0.5291118940, 11.3033303524],
    [0.0767819309, 0.6933574207, 17.0037690258],
    [0.1298913487, 0.7582999905, 23.5636247633],
    [0.1929539614, 0.7561842044, 30.3393522543],
    [0.2598174447, 0.7183613947, 36.4813654360],
    [0.3274786747, 0.6628086807, 41.1679845367],
    [0.3938947714, 0.6018506771, 44.0733025832],
    [0.4575779122, 0.5404738235, 45.0146749915],
    [0.5164065473, 0.4825351697, 43.9936222439],
    [0.5683649684, 0.4309577449, 41.1281100322],
    [0.6120681449, 0.3874435850, 36.7423785552],
    [0.6471233685, 0.3525434743, 31.2196681665],
    [0.6742666809, 0.3255091206, 25.2413224111],
    [0.6942775746, 0.3055988438, 19.3312029665],
    [0.7083100478, 0.2916163354, 13.9471060368],
    [0.7180009044, 0.2819693629, 9.4059008942],
    [0.7246532895, 0.2753332579, 5.9934316004],
    [0.7289432360, 0.2710567640, 3.5771675440],
    [0.7315079006, 0.2684920994, 2.0159768415],
    [0.7329900775, 0.2670099225, 1.0833855185],
    [0.7339645132, 0.2660354868, 0.5736051013],
    [0.7345363627, 0.2654636373, 0.2918610422],
    [0.7346874288, 0.2653125712, 0.1509333615],
    [0.7346819473, 0.2653180527, 0.0780831129],
    [0.7346800686, 0.2653199314, 0.0397600029],
    [0.7346868730, 0.2653131270, 0.0200057187],
    [0.7347530560, 0.2652469440, 0.0099259473],
    [0.5764074188, 0.1918130034, 0.0048457917],
    [0.2860788179, 0.0569756356, 0.0024555540],
    [0.1874680466, 0.0113056731, 0.0017045990],
    [0.1740916135, 0.0053941909, 0.0030277969],
    [0.1698997021, 0.0062398947, 0.0369990518],
    [0.1672212841, 0.0084921674, 0.0981485590],
    [0.1633665991, 0.0118453108, 0.2145393199],
    [0.1578439078, 0.0169177708, 0.4242683111],
    [0.1508257468, 0.0253490661, 0.7837670446],
    [0.1417215249, 0.0410113949, 1.3975664396],
    [0.1285738296, 0.0714056548, 2.4104674903],
    [0.1094104252, 0.1316769734, 4.1412928785],
    [0.0851447475, 0.2452031094, 7.1045688677],
    [0.0678220951, 0.4223846786, 11.6648112714],
    [0.0791091453, 0.6034454479, 17.6253518016],
    [0.1212850807, 0.7111110940, 24.6030496709],
    [0.1787993818, 0.7395037286, 32.1313625549],
    [0.2414221853, 0.7207417013, 39.5611665966],
    [0.3061244096, 0.6772312805, 45.9384957445],
    [0.3707517021, 0.6215915746, 50.3953240324],
    [0.4329799920, 0.5635499570, 52.6139556365],
    [0.4907341030, 0.5076064279, 52.5613600355],
    [0.5421982536, 0.4568872254, 50.3499243746],
    [0.5864672016, 0.4129324726, 46.1995088637],
    [0.6233772399, 0.3761855989, 40.4470076622],
    [0.6538380218, 0.3458569320, 33.7819754644],
    [0.6779658358, 0.3218259993, 26.8778880105],
    [0.6961996065, 0.3036834670, 20.3034081675],
    [0.7092507576, 0.2906785497, 14.4772997257],
    [0.7184912745, 0.2814799385, 9.6980607074],
    [0.7248931763, 0.2750937025, 6.1394748419],
    [0.7290642838, 0.2709357162, 3.6525424409],
    [0.7315697149, 0.2684302851, 2.0555907194],
    [0.7330213014, 0.2669786986, 1.1037987902],
    [0.7339775562, 0.2660224438, 0.5840208555],
    [0.7345413275, 0.2654586725, 0.2969766030],
    [0.7346845655, 0.2653154345, 0.1534580099],
    [0.7346792061, 0.2653207939, 0.0793738808],
    [0.7346773509, 0.2653226491, 0.0404189905],
    [0.7347227576, 0.2652772424, 0.0203417015],
    [0.6449990504, 0.2235777302, 0.0099613524],
    [0.3671388397, 0.0946665696, 0.0049802023],
    [0.2045571554, 0.0192460177, 0.0029953668],
    [0.1765589742, 0.0065392967, 0.0036867845],
    [0.1721294202, 0.0051807180, 0.0108111777],
    [0.1672255343, 0.0084899912, 0.0981839642],
    [0.1633823287, 0.0118348640, 0.2146737305],
    [0.1579131211, 0.0168636213, 0.4248081239],
    [0.1511124639, 0.0250781810, 0.7857492301],
    [0.1429934947, 0.0394727711, 1.4053498204],
    [0.1326939932, 0.0648113990, 2.4369913471],
    [0.1177679887, 0.1133182189, 4.2024777909],
    [0.0983790575, 0.2030920080, 7.2210940392],
    [0.0833568225, 0.3422646442, 11.8750800755],
    [0.0870466330, 0.5072202005, 17.9868327206],
    [0.1177088470, 0.6421408381, 25.2246324466],
    [0.1687916407, 0.7061571736, 33.1707874625],
    [0.2280872593, 0.7103187126, 41.3531768972],
    [0.2894459970, 0.6813946979, 49.0182969052],
    [0.3512104728, 0.6355800509, 55.1658352402],
    [0.4114108522, 0.5823328742, 58.9359770857],
    [0.4675824903, 0.5294819999, 60.1606406805],
    [0.5179074988, 0.4806556140, 58.9176621661],
    [0.5615878231, 0.4375964512, 55.4213232061],
    [0.5988356929, 0.4006195070, 49.9041379708],
    [0.6308570579, 0.3687374543, 43.0093149601],
    [0.6579958674, 0.3417166645, 35.4185410638],
    [0.6801150040, 0.3196854340, 27.8500932115],
    [0.6972282939, 0.3026581400, 20.8336018563],
    [0.7097710758, 0.2901597535, 14.7694595390],
    [0.7187410159, 0.2812306493, 9.8441039489],
    [0.7250162851, 0.2749707586, 6.2148497388],
    [0.7291257787, 0.2708742213, 3.6921563188],
    [0.7316005327, 0.2683994673, 2.0760039912],
    [0.7330370344, 0.2669629656, 1.1142145444],
    [0.7339849317, 0.2660150683, 0.5891364162],
    [0.7345410910, 0.2654589090, 0.2995012514],
    [0.7346831376, 0.2653168624, 0.1547487777],
    [0.7346778406, 0.2653221594, 0.0800328683],
    [0.7346953427, 0.2653046573, 0.0407549732],
    [0.6870132271, 0.2431238300, 0.0203771066],
    [0.4657924211, 0.1404158333, 0.0100957631],
    [0.2350734714, 0.0334252281, 0.0055200152],
    [0.1813294106, 0.0087532634, 0.0049775523],
    [0.1727975609, 0.0054899748, 0.0114701653],
    [0.1700217507, 0.0062952027, 0.0373350346],
    [0.1633865463, 0.0118321631, 0.2147091357],
    [0.1579303486, 0.0168506655, 0.4249425346],
    [0.1511920032, 0.0250055954, 0.7862890430],
    [0.1433327396, 0.0390751516, 1.4073320058],
    [0.1342033814, 0.0624834117, 2.4447747280],
    [0.1225679457, 0.1033239638, 4.2290016477],
    [0.1074128216, 0.1767929062, 7.2822789516],
    [0.0950418184, 0.2905142665, 11.9916052470],
    [0.0965174684, 0.4277581010, 18.1971015246],
    [0.1185891223, 0.5618899300, 25.5861133656],
    [0.1617645205, 0.6541592958, 33.7923702382],
    [0.2176602605, 0.6866139467, 42.3926018048],
    [0.2770079790, 0.6750725402, 50.8103072058],
    [0.3359751764, 0.6407560187, 58.2456364009],
    [0.3933732289, 0.5957882627, 63.7064882935],
    [0.4473761440, 0.5473323276, 66.4826621297],
    [0.4960135369, 0.5014396920, 66.5169428112],
    [0.5384447718, 0.4602701402, 63.9890609977],
    [0.5749105675, 0.4243429587, 59.1259523131],
    [0.6070359476, 0.3924542299, 52.4664452687],
    [0.6354913015, 0.3641229628, 44.6458805595],
    [0.6604119999, 0.3393101823, 36.3907462648],
    [0.6812669152, 0.3185379539, 28.3802869004],
    [0.6977954317, 0.3020927820, 21.1257616696],
    [0.7100341727, 0.2898973958, 14.9155027805],
    [0.7188693977, 0.2811024956, 9.9194788458],
    [0.7250796926, 0.2749074362, 6.2544636167],
    [0.7291568853, 0.2708431147, 3.7125695905],
    [0.7316161543, 0.2683838457, 2.0864197454],
    [0.7330452572, 0.2669547428, 1.1193301051],
    [0.7339871906, 0.2660128094, 0.5916610646],
    [0.7345409717, 0.2654590283, 0.3007920192],
    [0.7346824178, 0.2653175822, 0.1554077653],
    [0.7346869625, 0.2653130375, 0.0803688511],
    [0.7098209843, 0.2537527326, 0.0407903784],
    [0.5607641294, 0.1845250928, 0.0205115173],
    [0.2873451429, 0.0576652798, 0.0106355759],
    [0.1904281063, 0.0129759817, 0.0075022007],
    [0.1741016676, 0.0060935960, 0.0127609331],
    [0.1702579090, 0.0064036370, 0.0379940221],
    [0.1672884128, 0.0085181033, 0.0985199469],
    [0.1579349242, 0.0168473044, 0.4249779397],
    [0.1512116472, 0.0249881398, 0.7864234536],
    [0.1434261999, 0.0389683774, 1.4078718187],
    [0.1346042107, 0.0618808688, 2.4467569134],
    [0.1243228569, 0.0997946368, 4.2367850286],
    [0.1126590676, 0.1622919209, 7.3088028084],
    [0.1033747115, 0.2569211924, 12.0527901594],
    [0.1045730121, 0.3728177826, 18.3136266962],
    [0.1220026923, 0.4902870038, 25.7963821697],
    [0.1576992102, 0.5897600894, 34.1538511572],
    [0.2087494189, 0.6475544529, 43.0141845806],
    [0.2666492811, 0.6580733500, 51.8497321134],
    [0.3243968036, 0.6371415489, 60.0376467015],
    [0.3793413820, 0.6014970226, 66.7862894542],
    [0.4305939176, 0.5602188345, 71.2531733375],
    [0.4769566052, 0.5184380204, 72.8389642603],
    [0.5175783106, 0.4801388933, 71.5883416427],
    [0.5526159283, 0.4462018340, 67.6936901047],
    [0.5837649702, 0.4155324443, 61.6882596110],
    [0.6121232081, 0.3873887724, 54.1030108680],
    [0.6381863806, 0.3614388872, 45.6180857605],
    [0.6617084522, 0.3380187617, 36.9209399537],
    [0.6819006062, 0.3179066340, 28.6724467136],
    [0.6980809162, 0.3018081695, 21.2718049111],
    [0.7101695529, 0.2897623914, 14.9908776774],
    [0.7189360047, 0.2810360071, 9.9590927237],
    [0.7251120070, 0.2748751651, 6.2748768885],
    [0.7291726984, 0.2708273016, 3.7229853447],
    [0.7316240955, 0.2683759045, 2.0915353061],
    [0.7330485791, 0.2669514209, 1.1218547535],
    [0.7339883381, 0.2660116619, 0.5929518324],
    [0.7345409112, 0.2654590888, 0.3014510068],
    [0.7346871150, 0.2653128850, 0.1557437480],
    [0.7217909460, 0.2593237038, 0.0804042563],
    [0.6318951595, 0.2175771268, 0.0409247890],
    [0.3658563930, 0.0941069658, 0.0210513301],
    [0.2080061976, 0.0211192976, 0.0126177614],
    [0.1766349802, 0.0072661697, 0.0152855815],
    [0.1707199034, 0.0066157660, 0.0392847900],
    [0.1674101197, 0.0085732399, 0.0991789345],
    [0.1634268908, 0.0118498447, 0.2150451185],
    [0.1512168362, 0.0249836025, 0.7864588588],
    [0.1434491723, 0.0389426231, 1.4080062293],
    [0.1347141379, 0.0617188582, 2.4472967263],
    [0.1247877606, 0.0988793973, 4.2387672140],
    [0.1145838968, 0.1571417621, 7.3165861893],
    [0.1083354026, 0.2379864826, 12.0793140162],
    [0.1107311810, 0.3355674655, 18.3748116085],
    [0.1258538297, 0.4377445266, 25.9129073412],
    [0.1562027180, 0.5287561991, 34.3641199613],
    [0.2014673123, 0.5968089879, 43.3756654996],
    [0.2568094228, 0.6285928301, 52.4713148891],
    [0.3143393493, 0.6248073558, 61.0770716090],
    [0.3685391624, 0.5996613879, 68.5782997548],
    [0.4175634963, 0.5661588805, 74.3329744982],
    [0.4612011203, 0.5307779629, 77.6094754681],
    [0.4994405519, 0.4964205893, 77.9103630919],
    [0.5325032236, 0.4653886586, 75.2929707497],
    [0.5620533180, 0.4368296674, 70.2559974026],
    [0.5892657713, 0.4100588165, 63.3248252104],
    [0.6150848337, 0.3844394114, 55.0752160690],
    [0.6396340425, 0.3599970083, 46.1482794493],
    [0.6624207982, 0.3373091256, 37.2130997669],
    [0.6822186636, 0.3175897446, 28.8184899551],
    [0.6982278781, 0.3016616529, 21.3471798080],
    [0.7102400807, 0.2896920595, 15.0304915553],
    [0.7189700853, 0.2810019871, 9.9795059955],
    [0.7251284575, 0.2748587367, 6.2852926427],
    [0.7291806184, 0.2708193816, 3.7281009055],
    [0.7316276167, 0.2683723833, 2.0940599545],
    [0.7330502717, 0.2669497283, 1.1231455213],
    [0.7339889220, 0.2660110780, 0.5936108200],
    [0.7345434955, 0.2654565045, 0.3017869895],
    [0.7279574260, 0.2621873990, 0.1557791532],
    [0.6773786460, 0.2387049786, 0.0805386669],
    [0.4602395349, 0.1379254192, 0.0414646019],
    [0.2404815717, 0.0361757699, 0.0230335156],
    [0.1817072238, 0.0096097833, 0.0204011422],
    [0.1716213475, 0.0070296725, 0.0418094383],
    [0.1676483573, 0.0086811682, 0.1004697023],
    [0.1635049924, 0.0118845320, 0.2157041061],
    [0.1579642232, 0.0168597703, 0.4253139225],
    [0.1434552203, 0.0389359211, 1.4080416345],
    [0.1347410740, 0.0616797129, 2.4474311369],
    [0.1249148782, 0.0986330579, 4.2393070269],
    [0.1150937990, 0.1558022863, 7.3185683747],
    [0.1101757487, 0.2311912721, 12.0870973971],
    [0.1145452377, 0.3140088357, 18.4013354654],
    [0.1292053260, 0.4006390535, 25.9740922536],
    [0.1562430150, 0.4817613999, 34.4806451328],
    [0.1963632164, 0.5464748071, 43.5859343036],
    [0.2475613319, 0.5888107584, 52.8327958081],
    [0.3041403751, 0.6023053919, 61.6986543848],
    [0.3588798043, 0.5905539149, 69.6177246623],
    [0.4074420015, 0.5654731674, 76.1249847988],
    [0.4489843948, 0.5367700666, 80.6892766288],
    [0.4844873008, 0.5082872387, 82.6808742997],
    [0.5150316648, 0.4811348832, 81.6149921989],
    [0.5424576608, 0.4555450109, 77.8552780477],
    [0.5679234223, 0.4309995597, 71.8925630020],
    [0.5924713887, 0.4068685869, 64.2970304114],
    [0.6166772273, 0.3828534979, 55.6054097579],
    [0.6404290258, 0.3592051526, 46.4404392626],
    [0.6627777077, 0.3369535554, 37.3591430084],
    [0.6823824229, 0.3174265833, 28.8938648521],
    [0.6983046217, 0.3015851419, 21.3867936859],
    [0.7102762491, 0.2896559915, 15.0509048270],
    [0.7189874482, 0.2809846550, 9.9899217497],
    [0.7251366301, 0.2748505749, 6.2904082034],
    [0.7291842996, 0.2708157004, 3.7306255539],
    [0.7316294136, 0.2683705864, 2.0953507223],
    [0.7330511343, 0.2669488657, 1.1238045089],
    [0.7339905535, 0.2660094465, 0.5939468028],
    [0.7310492147, 0.2638323358, 0.3018223947],
    [0.7035755453, 0.2508679000, 0.1559135638],
    [0.5513083559, 0.1802001456, 0.0810784798],
    [0.2937575005, 0.0608800290, 0.0434467873],
    [0.1917478143, 0.0142524672, 0.0308168964],
    [0.1734422169, 0.0078642743, 0.0469249991],
    [0.1681137548, 0.0088920061, 0.1029943507],
    [0.1636579091, 0.0119524470, 0.2169948739],
    [0.1580209476, 0.0168842318, 0.4259729101],
    [0.1512405872, 0.0249932621, 0.7867948415],
    [0.1347481501, 0.0616695195, 2.4474665421],
    [0.1249459603, 0.0985734717, 4.2394414375],
    [0.1152330023, 0.1554413770, 7.3191081876],
    [0.1106648383, 0.2294168404, 12.0890795825],
    [0.1159879129, 0.3061714321, 18.4091188462],
    [0.1314258542, 0.3786007438, 26.0006161104],
    [0.1568392385, 0.4473908735, 34.5418300452],
    [0.1933352490, 0.5061674995, 43.7024594752],
    [0.2399854747, 0.5479257923, 53.0430646122],
    [0.2937825268, 0.5709765467, 62.0601353038],
    [0.3486538769, 0.5730569051, 70.2393074381],
    [0.3982069399, 0.5585734309, 77.1644097064],
    [0.4394358678, 0.5368058724, 82.4812869294],
    [0.4729021812, 0.5142420400, 85.7606754604],
    [0.5006515067, 0.4926417767, 86.3855034067],
    [0.5254406957, 0.4709198134, 84.1772994968],
    [0.5486551210, 0.4494149949, 79.4918436470],
    [0.5713471579, 0.4275985795, 72.8647682030],
    [0.5941963986, 0.4051517373, 64.8272241003],
    [0.6175515213, 0.3819827185, 55.8975695712],
    [0.6408269394, 0.3588087882, 46.5864825041],
    [0.6629614957, 0.3367704543, 37.4345179054],
    [0.6824680612, 0.3173412577, 28.9334787299],
    [0.6983440294, 0.3015458537, 21.4072069577],
    [0.7102946839, 0.2896376079, 15.0613205812],
    [0.7189960366, 0.2809760818, 9.9950373104],
    [0.7251405245, 0.2748466858, 6.2929328518],
    [0.7291861797, 0.2708138203, 3.7319163217],
    [0.7316303301, 0.2683696699, 2.0960097099],
    [0.7330522837, 0.2669477163, 1.1241404917],
    [0.7322076949, 0.2651781809, 0.5939822080],
    [0.7180403283, 0.2577879559, 0.3019568053],
    [0.6222827808, 0.2131418606, 0.1564533767],
    [0.3700442492, 0.0962518824, 0.0830606652],
    [0.2104019826, 0.0228792958, 0.0512301682],
    [0.1771108760, 0.0095470602, 0.0573407533],
    [0.1690560444, 0.0093181381, 0.1081099114],
    [0.1639567666, 0.0120851787, 0.2195195222],
    [0.1581320221, 0.0169321308, 0.4272636779],
    [0.1512865740, 0.0250122232, 0.7874538291],
    [0.1434761690, 0.0389438370, 1.4083776173],
    [0.1249541130, 0.0985579492, 4.2394768427],
    [0.1152669953, 0.1553540113, 7.3192425982],
    [0.1107983982, 0.2289381542, 12.0896193954],
    [0.1163739723, 0.3041154091, 18.4111010317],
    [0.1322946737, 0.3704844351, 26.0083994912],
    [0.1574101613, 0.4265003373, 34.5683539020],
    [0.1915631320, 0.4758202944, 43.7636443875],
    [0.2346798906, 0.5141727479, 53.1595897837],
    [0.2846212944, 0.5378790796, 62.2704041078],
    [0.3377538075, 0.5480438844, 70.6007883571],
    [0.3881418160, 0.5446071205, 77.7859924821],
    [0.4306016738, 0.5313842287, 83.5207118370],
    [0.4638089353, 0.5147151795, 87.5526857610],
    [0.4895155619, 0.4985335462, 89.4653045674],
    [0.5114486838, 0.4821746045, 88.9478107046],
    [0.5319251686, 0.4645530168, 85.8138650962],
    [0.5522721263, 0.4458364886, 80.4640488480],
    [0.5731907508, 0.4257670854, 73.3949618918],
    [0.5951434797, 0.4042090907, 65.1193839135],
    [0.6179888881, 0.3815470951, 56.0436128127],
    [0.6410318689, 0.3586046539, 46.6618574010],
    [0.6630576956, 0.3366746140, 37.4741317832],
    [0.6825120714, 0.3172974083, 28.9538920017],
    [0.6983641203, 0.3015258237, 21.4176227119],
    [0.7103037806, 0.2896285363, 15.0664361419],
    [0.7190001837, 0.2809719421, 9.9975619588],
    [0.7251425144, 0.2748446986, 6.2942236196],
    [0.7291871391, 0.2708128609, 3.7325753093],
    [0.7316311820, 0.2683688180, 2.0963456926],
    [0.7321071467, 0.2665047158, 1.1241758968],
    [0.7254729847, 0.2620392611, 0.5941166186],
    [0.6702946595, 0.2356121559, 0.3024966182],
    [0.4603581194, 0.1381244470, 0.1584355621],
    [0.2431751110, 0.0380346516, 0.0908440460],
    [0.1841625290, 0.0127820767, 0.0777540250],
    [0.1709636054, 0.0101814338, 0.1185256656],
    [0.1645624055, 0.0123536849, 0.2246350830],
    [0.1583491522, 0.0170257644, 0.4297883263],
    [0.1513766280, 0.0250493540, 0.7887445969],
    [0.1435167328, 0.0389593850, 1.4090366049],
    [0.1347675190, 0.0616760012, 2.4478025248],
    [0.1152759029, 0.1553312462, 7.3192780034],
    [0.1108310052, 0.2288222108, 12.0897538060],
    [0.1164796640, 0.3035600389, 18.4116408445],
    [0.1325302787, 0.3683455756, 26.0103816767],
    [0.1576687439, 0.4187155186, 34.5761372828],
    [0.1906530703, 0.4570089794, 43.7901682444],
    [0.2310478624, 0.4881573285, 53.2207746961],
    [0.2777369673, 0.5098978348, 62.3869292794],
    [0.3276592520, 0.5210438895, 70.8110571611],
    [0.3770666042, 0.5241867131, 78.1474734011],
    [0.4207824616, 0.5198467965, 84.1422946128],
    [0.4553169414, 0.5102554689, 88.5921106685],
    [0.4807509121, 0.4992598774, 91.2573148680],
    [0.5006162770, 0.4880092888, 92.0276118653],
    [0.5181771638, 0.4756461099, 90.5843763040],
    [0.5357113406, 0.4608341743, 86.7860702972],
    [0.5542207471, 0.4439083751, 80.9942425369],
    [0.5742029712, 0.4247614489, 73.6871217051],
    [0.5956171087, 0.4037376639, 65.2654271550],
    [0.6182141649, 0.3813227141, 56.1189877096],
    [0.6411391991, 0.3584977403, 46.7014712789],
    [0.6631071582, 0.3366253362, 37.4945450550],
    [0.6825345120, 0.3172750496, 28.9643077559],
    [0.6983740198, 0.3015159540, 21.4227382726],
    [0.7103082054, 0.2896241239, 15.0689607903],
    [0.7190023031, 0.2809698265, 9.9988527266],
    [0.7251435299, 0.2748436845, 6.2948826072],
    [0.7291878481, 0.2708121519, 3.7329112920],
    [0.7311225645, 0.2681285169, 2.0963810978],
    [0.7285112233, 0.2648198788, 1.1243103075],
    [0.6993634556, 0.2498747223, 0.5946564315],
    [0.5491523633, 0.1794333698, 0.3044788036],
    [0.2954239426, 0.0621948137, 0.1662189430],
    [0.1973509313, 0.0188320276, 0.1173679029],
    [0.1746645305, 0.0118565902, 0.1389389374],
    [0.1657906950, 0.0128986449, 0.2350508372],
    [0.1587893626, 0.0172152577, 0.4349038870],
    [0.1515526867, 0.0251219461, 0.7912692453],
    [0.1435961696, 0.0389898329, 1.4103273727],
    [0.1348050261, 0.0616887472, 2.4484615124],
    [0.1249722740, 0.0985628346, 4.2398128254],
    [0.1108395472, 0.2287919935, 12.0897892112],
    [0.1165054952, 0.3034254576, 18.4117752552],
    [0.1325952086, 0.3677671113, 26.0109214896],
    [0.1577429357, 0.4166555791, 34.5781194683],
    [0.1903514685, 0.4499270681, 43.7979516252],
    [0.2289305461, 0.4717673030, 53.2472985529],
    [0.2727472878, 0.4879252216, 62.4481141917],
    [0.3197596427, 0.4977938534, 70.9275823327],
    [0.3664995841, 0.5017710956, 78.3577422052],
    [0.4097467371, 0.5026590229, 84.5037755318],
    [0.4457542085, 0.5003373092, 89.2136934443],
    [0.4725167113, 0.4953961461, 92.2967397756],
    [0.4920756599, 0.4888836239, 93.8196221659],
    [0.5075353284, 0.4814394329, 93.6641774647],
    [0.5221067839, 0.4718310937, 91.5565815050],
    [0.5377517889, 0.4588296371, 87.3162639860],
    [0.5552906767, 0.4428496160, 81.2864023501],
    [0.5747090804, 0.4242586116, 73.8331649466],
    [0.5958610898, 0.4034948148, 65.3408020519],
    [0.6183321995, 0.3812051489, 56.1586015875],
    [0.6411944028, 0.3584427510, 46.7218845507],
    [0.6631323815, 0.3366002072, 37.5049608092],
    [0.6825455594, 0.3172640425, 28.9694233166],
    [0.6983788561, 0.3015111325, 21.4252629210],
    [0.7103104670, 0.2896218686, 15.0702515581],
    [0.7190033849, 0.2809687467, 9.9995117142],
    [0.7251441820, 0.2748430331, 6.2952185899],
    [0.7289007655, 0.2706746563, 3.7329466972],
    [0.7291801764, 0.2672111617, 2.0965155084],
    [0.7141752053, 0.2581054180, 1.1248501203],
    [0.6214601093, 0.2136319927, 0.5966386169],
    [0.3703253067, 0.0969037772, 0.3122621845],
    [0.2207772209, 0.0295778633, 0.1927427998],
    [0.1817100131, 0.0150454111, 0.1785528153],
    [0.1681823264, 0.0139599062, 0.2554641089],
    [0.1596829556, 0.0176002040, 0.4453196412],
    [0.1519097074, 0.0252688831, 0.7963848060],
    [0.1437514805, 0.0390493632, 1.4128520211],
    [0.1348784783, 0.0617137084, 2.4497522803],
    [0.1250074445, 0.0985724661, 4.2404718130],
    [0.1152927438, 0.1553341677, 7.3196139861],
    [0.1165122660, 0.3033903782, 18.4118106603],
    [0.1326111336, 0.3676268777, 26.0110559002],
    [0.1577640531, 0.4160978383, 34.5786592812],
    [0.1902763714, 0.4480464506, 43.7999338107],
    [0.2281634401, 0.4655440374, 53.2550819337],
    [0.2697186735, 0.4738995894, 62.4746380486],
    [0.3138493838, 0.4792682096, 70.9887672450],
    [0.3580126505, 0.4821948787, 78.4742673767],
    [0.3990070420, 0.4835481696, 84.7140443358],
    [0.4348557912, 0.4853423059, 89.5751743633],
    [0.4631673234, 0.4865011791, 92.9183225513],
    [0.4840215520, 0.4853873045, 94.8590470735],
    [0.4991361221, 0.4823978803, 95.4561877653],
    [0.5115768922, 0.4775981949, 94.6363826656],
    [0.5242249754, 0.4697740816, 92.0867751938],
    [0.5388721653, 0.4577288355, 87.6084237993],
    [0.5558255748, 0.4423202721, 81.4324455916],
    [0.5749698160, 0.4239995585, 73.9085398435],
    [0.5959889606, 0.4033675373, 65.3804159298],
    [0.6183929224, 0.3811446675, 56.1790148592],
    [0.6412225556, 0.3584147074, 46.7323003049],
    [0.6631447917, 0.3365878432, 37.5100763699],
    [0.6825509710, 0.3172586507, 28.9719479650],
    [0.6983813282, 0.3015086678, 21.4265536888],
    [0.7103116215, 0.2896207173, 15.0709105457],
    [0.7190040248, 0.2809681078, 9.9998476969],
    [0.7249726385, 0.2747590161, 6.2952539951],
    [0.7278023157, 0.2701487632, 3.7330811078],
    [0.7213202125, 0.2635004614, 2.0970553213],
    [0.6672913246, 0.2361777901, 1.1268323058],
    [0.4624736813, 0.1399663680, 0.6044219977],
    [0.2607423725, 0.0479439377, 0.3387860413],
    [0.1946382470, 0.0208964913, 0.2539277122],
    [0.1727668600, 0.0159941243, 0.2950779868],
    [0.1614259937, 0.0183511903, 0.4657329129],
    [0.1526347668, 0.0255675207, 0.8068005602],
    [0.1440664629, 0.0391698658, 1.4179675818],
    [0.1350220935, 0.0617625129, 2.4522769286],
    [0.1250763217, 0.0985913283, 4.2417625809],
    [0.1153253602, 0.1553399698, 7.3202729737],
    [0.1108546719, 0.2287928238, 12.0901251939],
    [0.1326153169, 0.3675903209, 26.0110913054],
    [0.1577693282, 0.4159625836, 34.5787936918],
    [0.1902568933, 0.4475367736, 43.8004736235],
    [0.2279634663, 0.4638865085, 53.2570641192],
    [0.2685940624, 0.4685368781, 62.4824214294],
    [0.3101823227, 0.4673196691, 71.0152911019],
    [0.3515333027, 0.4664203728, 78.5354522891],
    [0.3902316114, 0.4666812233, 84.8305695074],
    [0.4241103082, 0.4685112910, 89.7854431673],
    [0.4524177528, 0.4729092539, 93.2798034703],
    [0.4748289911, 0.4771320225, 95.4806298492],
    [0.4911973326, 0.4791187216, 96.4956126729],
    [0.5032610132, 0.4786029692, 96.4283929662],
    [0.5137557203, 0.4755263716, 95.1665763545],
    [0.5253880391, 0.4686443819, 92.3789350071],
    [0.5394322331, 0.4571785042, 87.7544670408],
    [0.5561011599, 0.4420475439, 81.5078204886],
    [0.5751064949, 0.4238637615, 73.9481537214],
    [0.5960547538, 0.4033020494, 65.4008292016],
    [0.6184238913, 0.3811138216, 56.1894306134],
    [0.6412364023, 0.3584009144, 46.7374158656],
    [0.6631508812, 0.3365817766, 37.5126010183],
    [0.6825537373, 0.3172558945, 28.9732387328],
    [0.6983825902, 0.3015074097, 21.4272126764],
    [0.7103122724, 0.2896200681, 15.0712465285],
    [0.7188948441, 0.2809128044, 9.9998831021],
    [0.7243156146, 0.2744373492, 6.2953884057],
    [0.7233232833, 0.2680052206, 3.7336209207],
    [0.6942473469, 0.2507371582, 2.0990375067],
    [0.5471518825, 0.1801943301, 1.1346156866],
    [0.3242083453, 0.0773005882, 0.6309458546],
    [0.2180037632, 0.0314899759, 0.3999709537],
    [0.1812886415, 0.0197751554, 0.3704528837],
    [0.1647787371, 0.0197956303, 0.5053467908],
    [0.1540503510, 0.0261506605, 0.8272138320],
    [0.1447063039, 0.0394148447, 1.4283833360],
    [0.1353133744, 0.0618612961, 2.4573924894],
    [0.1252109956, 0.0986282089, 4.2442872292],
    [0.1153892364, 0.1553513327, 7.3215637415],
    [0.1108839655, 0.2287945474, 12.0907841815],
    [0.1165253163, 0.3033895318, 18.4121466431],
    [0.1577707304, 0.4159273216, 34.5788290970],
    [0.1902522968, 0.4474131405, 43.8006080342],
    [0.2279099717, 0.4634369323, 53.2576039321],
    [0.2682976068, 0.4671050811, 62.4844036149],
    [0.3088030557, 0.4627257446, 71.0230744827],
    [0.3474565492, 0.4561641944, 78.5619761459],
    [0.3834414042, 0.4529750011, 84.8917544197],
    [0.4152295086, 0.4535431398, 89.9019683389],
    [0.4417309712, 0.4575539750, 93.4900722744],
    [0.4642011168, 0.4644247294, 95.8421107683],
    [0.4821080910, 0.4712451664, 97.1171954486],
    [0.4953907461, 0.4754466307, 97.4678178738],
    [0.5054850572, 0.4765552681, 96.9585866551],
    [0.5149520746, 0.4743883909, 95.4587361678],
    [0.5259694039, 0.4680796166, 92.5249782486],
    [0.5397207991, 0.4568949471, 87.8298419377],
    [0.5562456435, 0.4419045580, 81.5474343665],
    [0.5751768279, 0.4237938825, 73.9685669932],
    [0.5960883098, 0.4032686490, 65.4112449558],
    [0.6184391198, 0.3810986536, 56.1945461741],
    [0.6412432038, 0.3583941393, 46.7399405140],
    [0.6631539941, 0.3365786753, 37.5138917861],
    [0.6825551495, 0.3172544875, 28.9738977204],
    [0.6983832811, 0.3015067207, 21.4275486591],
    [0.7102387862, 0.2895810559, 15.0712819337],
    [0.7184764476, 0.2807009577, 10.0000175127],
    [0.7216257723, 0.2731209813, 6.2959282186],
    [0.7074654862, 0.2604266626, 3.7356031061],
    [0.6136576021, 0.2128753569, 2.1068208876],
    [0.4037619213, 0.1145048867, 1.1611395435],
    [0.2589433901, 0.0501635798, 0.6921307669],
    [0.1970598714, 0.0267849268, 0.5164961252],
    [0.1710513309, 0.0224978691, 0.5807216877],
    [0.1567780249, 0.0272742379, 0.8668277099],
    [0.1459561050, 0.0398934375, 1.4487966077],
    [0.1359051562, 0.0620621617, 2.4678082436],
    [0.1254841547, 0.0987028365, 4.2494027900],
    [0.1155141355, 0.1553735508, 7.3240883899],
    [0.1109413353, 0.2287979228, 12.0920749493],
    [0.1165505914, 0.3033879816, 18.4128056307],
    [0.1326262187, 0.3675884367, 26.0114272881],
    [0.1902511209, 0.4473809061, 43.8006434393],
    [0.2278970996, 0.4633278538, 53.2577383427],
    [0.2682177856, 0.4667164781, 62.4849434277],
    [0.3084374735, 0.4614968375, 71.0250566682],
    [0.3459108464, 0.4522038914, 78.5697595268],
    [0.3791289946, 0.4440095729, 84.9182782766],
    [0.4082961202, 0.4413059235, 89.9631532512],
    [0.4328344758, 0.4438280792, 93.6065974459],
    [0.4535801845, 0.4500069803, 96.0523795723],
    [0.4715647774, 0.4590686804, 97.4786763676],
    [0.4863638941, 0.4677902938, 98.0894006496],
    [0.4976521492, 0.4734639585, 97.9980115627],
    [0.5067062578, 0.4754302908, 97.2507464684],
    [0.5155500490, 0.4738194640, 95.6047794093],
    [0.5262689511, 0.4677886101, 92.6003531455],
    [0.5398721036, 0.4567462692, 87.8694558156],
    [0.5563199984, 0.4418309740, 81.5678476382],
    [0.5752127003, 0.4237582416, 73.9789827474],
    [0.5961048081, 0.4032522271, 65.4163605165],
    [0.6184466051, 0.3810911981, 56.1970708225],
    [0.6412466808, 0.3583906758, 46.7412312818],
    [0.6631555833, 0.3365770921, 37.5145507737],
    [0.6825559084, 0.3172537312, 28.9742337032],
    [0.6983306678, 0.3014769611, 21.4275840643],
    [0.7099570875, 0.2894315700, 15.0714163443],
    [0.7167598133, 0.2798321405, 10.0005573256],
    [0.7119616929, 0.2683981224, 6.2979104040],
    [0.6559358322, 0.2358830844, 3.7433864870],
    [0.4892338453, 0.1552554264, 2.1333447444],
    [0.3182639928, 0.0774811734, 1.2223244558],
    [0.2259040686, 0.0396807828, 0.8086559385],
    [0.1828010197, 0.0275685118, 0.7267649292],
    [0.1618981814, 0.0293832097, 0.9422026068],
    [0.1483665505, 0.0408164237, 1.4884104856],
    [0.1370614119, 0.0624546909, 2.4882215153],
    [0.1260391843, 0.0988546229, 4.2598185442],
    [0.1157674811, 0.1554184684, 7.3292039506],
    [0.1110535159, 0.2288045231, 12.0945995977],
    [0.1166000921, 0.3033849456, 18.4140963985],
    [0.1326473308, 0.3675848553, 26.0120862757],
    [0.1577796231, 0.4159249755, 34.5791650797],
    [0.2278937623, 0.4632994126, 53.2577737479],
    [0.2681985053, 0.4666221768, 62.4850778384],
    [0.3083387561, 0.4611631288, 71.0255964810],
    [0.3454997928, 0.4511428939, 78.5717417122],
    [0.3774852450, 0.4405363953, 84.9260616574],
    [0.4038652152, 0.4332664048, 89.9896771081],
    [0.4258491260, 0.4325605884, 93.6677823583],
    [0.4446980304, 0.4370758015, 96.1689047438],
    [0.4609953809, 0.4452161902, 97.6889451717],
    [0.4758731180, 0.4559168793, 98.4508815686],
    [0.4886596211, 0.4659230556, 98.6195943385],
    [0.4988939249, 0.4723743146, 98.2901713760],
    [0.5073166342, 0.4748678028, 97.3967897099],
    [0.5158581599, 0.4735262997, 95.6801543062],
    [0.5264260241, 0.4676360158, 92.6399670234],
    [0.5399499729, 0.4566697517, 87.8898690874],
    [0.5563579229, 0.4417934427, 81.5782633924],
    [0.5752303357, 0.4237407199, 73.9840983081],
    [0.5961129212, 0.4032441518, 65.4188851649],
    [0.6184504317, 0.3810873868, 56.1983615903],
    [0.6412484559, 0.3583889077, 46.7418902694],
    [0.6631564273, 0.3365762511, 37.5148867564],
    [0.6825162019, 0.3172293432, 28.9742691083],
    [0.6981289438, 0.3013629093, 21.4277184749],
    [0.7087998621, 0.2888177528, 15.0719561572],
    [0.7105426184, 0.2766899403, 10.0025395111],
    [0.6789642039, 0.2523255356, 6.3056937849],
    [0.5609655115, 0.1912342748, 3.7699103438],
    [0.3947644378, 0.1132595723, 2.1945296568],
    [0.2706853289, 0.0598841811, 1.3388496274],
    [0.2047779265, 0.0371083733, 1.0189247425],
    [0.1715493047, 0.0333655402, 1.0882458483],
    [0.1528991334, 0.0425519040, 1.5637853825],
    [0.1392926661, 0.0632121122, 2.5278353932],
    [0.1271238770, 0.0991513174, 4.2802318159],
    [0.1162823147, 0.1555098748, 7.3396197048],
    [0.1112810776, 0.2288177919, 12.0997151584],
    [0.1166968889, 0.3033790088, 18.4166210469],
    [0.1326886791, 0.3675778412, 26.0133770435],
    [0.1577968417, 0.4159204841, 34.5798240673],
    [0.1902582487, 0.4473785038, 43.8009794221],
    [0.2681934940, 0.4665975875, 62.4851132436],
    [0.3083148736, 0.4610821378, 71.0257308917],
    [0.3453886187, 0.4508546662, 78.5722815251],
    [0.3770471806, 0.4396048541, 84.9280438428],
    [0.4021703250, 0.4301445847, 89.9974604889],
    [0.4213671200, 0.4251363743, 93.6943062151],
    [0.4376987525, 0.4264323267, 96.2300896562],
    [0.4521320183, 0.4327662706, 97.8054703432],
    [0.4653375953, 0.4423880628, 98.6611503726],
    [0.4781981996, 0.4542110141, 98.9810752575],
    [0.4899203794, 0.4648962444, 98.9117541517],
    [0.4995145815, 0.4718293813, 98.4362146175],
    [0.5076311409, 0.4745779392, 97.4721646068],
    [0.5160197309, 0.4733725669, 95.7197681841],
    [0.5265068652, 0.4675574799, 92.6603802952],
    [0.5399896904, 0.4566307235, 87.9002848416],
    [0.5563765659, 0.4417749928, 81.5833789531],
    [0.5752390106, 0.4237321010, 73.9866229565],
    [0.5961170688, 0.4032400235, 65.4201759327],
    [0.6184523853, 0.3810854410, 56.1990205779],
    [0.6412493917, 0.3583879754, 46.7422262521],
    [0.6631251335, 0.3365550313, 37.5149221616],
    [0.6823639442, 0.3171358681, 28.9744035190],
    [0.6972996451, 0.3008942628, 21.4282582878],
    [0.7045892766, 0.2865875552, 15.0739383426],
    [0.6887131266, 0.2656933978, 10.0103228919],
    [0.6109643285, 0.2196077843, 6.3322176417],
    [0.4728085301, 0.1511351291, 3.8310952562],
    [0.3343883088, 0.0890316955, 2.3110548283],
    [0.2402096894, 0.0526260064, 1.5491184314],
    [0.1898151598, 0.0409472488, 1.3804056615],
    [0.1614709437, 0.0458400205, 1.7098286240],
    [0.1434926790, 0.0646377636, 2.6032102901],
    [0.1292179489, 0.0997240605, 4.3198456938],
    [0.1172886890, 0.1556886017, 7.3600329766],
    [0.1117435773, 0.2288448620, 12.1101309126],
    [0.1168932589, 0.3033668721, 18.4217366076],
    [0.1327695370, 0.3675641248, 26.0159016919],
    [0.1578305649, 0.4159116876, 34.5811148351],
    [0.1902720467, 0.4473738925, 43.8016384097],
    [0.2278994149, 0.4632971898, 53.2581097306],
    [0.3083086597, 0.4610610185, 71.0257662968],
    [0.3453616997, 0.4507847064, 78.5724159357],
    [0.3769285851, 0.4393517187, 84.9285836557],
    [0.4017179963, 0.4293066010, 89.9994426744],
    [0.4196488061, 0.4222489062, 93.7020895960],
    [0.4331963985, 0.4194057910, 96.2566135130],
    [0.4451323618, 0.4225020785, 97.8666552556],
    [0.4564887477, 0.4302144377, 98.7776755442],
    [0.4676821566, 0.4408548205, 99.1913440615],
    [0.4794753070, 0.4532721290, 99.2732350708],
    [0.4905505378, 0.4643825531, 99.0577973932],
    [0.4998343934, 0.4715485388, 98.5115895144],
    [0.5077960719, 0.4744259319, 97.5117784847],
    [0.5161028892, 0.4732934431, 95.7401814558],
    [0.5265480989, 0.4675174218, 92.6707960494],
    [0.5400092139, 0.4566115387, 87.9054004023],
    [0.5563857384, 0.4417659155, 81.5859036015],
    [0.5752434454, 0.4237276948, 73.9879137243],
    [0.5961191862, 0.4032379159, 65.4208349203],
    [0.6184534102, 0.3810844201, 56.1993565607],
    [0.6412238456, 0.3583686480, 46.7422616573],
    [0.6630051239, 0.3364736948, 37.5150565723],
    [0.6817377143, 0.3167516133, 28.9749433318],
    [0.6942740418, 0.2991869511, 21.4302404732],
    [0.6895612294, 0.2786537223, 15.0817217234],
    [0.6405871403, 0.2417345238, 10.0368467488],
    [0.5379596966, 0.1854802607, 6.3934025541],
    [0.4076393738, 0.1236321790, 3.9476204277],
    [0.2935837457, 0.0763188391, 2.5213236324],
    [0.2198678436, 0.0535330493, 1.9105993504],
    [0.1777961509, 0.0521407469, 2.0019884373],
    [0.1514512922, 0.0673445935, 2.7492535316],
    [0.1331630082, 0.1008029873, 4.3952205907],
    [0.1192324443, 0.1560337644, 7.3996468545],
    [0.1126478924, 0.2288978313, 12.1305441844],
    [0.1172924204, 0.3033422811, 18.4321523618],
    [0.1329335852, 0.3675362259, 26.0210172526],
    [0.1578965138, 0.4158944851, 34.5836394835],
    [0.1902990711, 0.4473648608, 43.8029291775],
    [0.2279103539, 0.4632929186, 53.2587687182],
    [0.2681979620, 0.4665956480, 62.4854492263],
    [0.3453546921, 0.4507664632, 78.5724513409],
    [0.3768998548, 0.4392902723, 84.9287180663],
    [0.4015954638, 0.4290788401, 89.9999824873],
    [0.4191898175, 0.4214734059, 93.7040717814],
    [0.4314678112, 0.4166701525, 96.2643968939],
    [0.4406228613, 0.4157179198, 97.8931791124],
    [0.4494918544, 0.4201684723, 98.8388604565],
    [0.4588422679, 0.4288287648, 99.3078692331],
    [0.4689702519, 0.4400100736, 99.4835038748],
    [0.4801136739, 0.4528021784, 99.4192783123],
    [0.4908752593, 0.4641177742, 99.1331722901],
    [0.5000021126, 0.4714012571, 98.5512033923],
    [0.5078809611, 0.4743476947, 97.5321917564],
    [0.5161453050, 0.4732530849, 95.7505972100],
    [0.5265683669, 0.4674977313, 92.6759116101],
    [0.5400188211, 0.4566020984, 87.9079250507],
    [0.5563904276, 0.4417612749, 81.5871943693],
    [0.5752457095, 0.4237254454, 73.9885727119],
    [0.5961202936, 0.4032368135, 65.4211709030],
    [0.6184319198, 0.3810662291, 56.1993919658],
    [0.6411258712, 0.3582945622, 46.7423960679],
    [0.6625113752, 0.3361392539, 37.5155963851],
    [0.6794491597, 0.3153494641, 28.9769255173],
    [0.6833705021, 0.2930542874, 21.4380238541],
    [0.6550339623, 0.2606333680, 15.1082455803],
    [0.5836824497, 0.2141438865, 10.0980316611],
    [0.4768242663, 0.1585814410, 6.5099277256],
    [0.3597894720, 0.1065868178, 4.1578892317],
    [0.2666105439, 0.0733716594, 2.8828045514],
    [0.2049511584, 0.0627179244, 2.5321821262],
    [0.1666661560, 0.0725534672, 3.0414133449],
    [0.1406503253, 0.1028553915, 4.5412638322],
    [0.1228974822, 0.1566845213, 7.4750217514],
    [0.1143954273, 0.2290001606, 12.1701580623],
    [0.1180731126, 0.3032942158, 18.4525656335],
    [0.1332670900, 0.3674795684, 26.0314330068],
    [0.1580303251, 0.4158595278, 34.5887550442],
    [0.1903519210, 0.4473471982, 43.8054538259],
    [0.2279317788, 0.4632845531, 53.2600594860],
    [0.2682066050, 0.4665919205, 62.4861082139],
    [0.3083122113, 0.4610593784, 71.0261022796],
    [0.3768923735, 0.4392742488, 84.9287534715],
    [0.4015657707, 0.4290235504, 90.0001168979],
    [0.4190654336, 0.4212625976, 93.7046115943],
    [0.4310058191, 0.4159351679, 96.2663790793],
    [0.4388900346, 0.4130749586, 97.9009624933],
    [0.4449801717, 0.4135239967, 98.8653843134],
    [0.4518478163, 0.4188994971, 99.3690541454],
    [0.4601355649, 0.4280645577, 99.6000290463],
    [0.4696141653, 0.4395869755, 99.6295471163],
    [0.4804426455, 0.4525598960, 99.4946532092],
    [0.4910455612, 0.4639789107, 99.1727861680],
    [0.5000884387, 0.4713254508, 98.5716166640],
    [0.5079242600, 0.4743077883, 97.5426075106],
    [0.5161661536, 0.4732332470, 95.7557127708],
    [0.5265783416, 0.4674880413, 92.6784362585],
    [0.5400237325, 0.4565972723, 87.9092158185],
    [0.5563928216, 0.4417589058, 81.5878533569],
    [0.5752468910, 0.4237242713, 73.9889086946],
    [0.5961017411, 0.4032193045, 65.4212063082],
    [0.6183494943, 0.3809964985, 56.1995263765],
    [0.6407226889, 0.3579898862, 46.7429358808],
    [0.6607050010, 0.3349176141, 37.5175785706],
    [0.6711525319, 0.3102829387, 28.9847088981],
    [0.6576858233, 0.2787688161, 21.4645477109],
    [0.6115645196, 0.2385030707, 15.1694304926],
    [0.5313795247, 0.1900845430, 10.2145568327],
    [0.4278660874, 0.1396257784, 6.7201965297],
    [0.3272282912, 0.0998465970, 4.5193701508],
    [0.2479362296, 0.0796913790, 3.5043873271],
    [0.1921429634, 0.0813616846, 3.5716070338],
    [0.1550076519, 0.1068210182, 4.8334236455],
    [0.1298647977, 0.1579256106, 7.6210649929],
    [0.1176937175, 0.2291932461, 12.2455329592],
    [0.1195825835, 0.3032012576, 18.4921795114],
    [0.1339195453, 0.3673687493, 26.0518462786],
    [0.1583023901, 0.4157884979, 34.5991707984],
    [0.1904591634, 0.4473113167, 43.8105693866],
    [0.2279736791, 0.4632681928, 53.2625841344],
    [0.2682235334, 0.4665846198, 62.4873989817],
    [0.3083190785, 0.4610562272, 71.0267612672],
    [0.3453575596, 0.4507650891, 78.5727873236],
    [0.4015580372, 0.4290091322, 90.0001523031],
    [0.4190352864, 0.4212114214, 93.7047460049],
    [0.4308805919, 0.4157353545, 96.2669188922],
    [0.4384267529, 0.4123647181, 97.9029446787],
    [0.4432456480, 0.4109344940, 98.8731676942],
    [0.4473355915, 0.4123297854, 99.3955780023],
    [0.4531426973, 0.4181990236, 99.6612139587],
    [0.4607821355, 0.4276815616, 99.7460722878],
    [0.4699460192, 0.4393687957, 99.7049220132],
    [0.4806151866, 0.4524328238, 99.5342670871],
    [0.4911332189, 0.4639074356, 99.1931994398],
    [0.5001324708, 0.4712867840, 98.5820324182],
    [0.5079455424, 0.4742881725, 97.5477230714],
    [0.5161764147, 0.4732234840, 95.7582374191],
    [0.5265834409, 0.4674830874, 92.6797270263],
    [0.5400262399, 0.4565948085, 87.9098748061],
    [0.5563940690, 0.4417576711, 81.5881893397],
    [0.5752305060, 0.4237071663, 73.9889440998],
    [0.5960305796, 0.4031521867, 65.4213407188],
    [0.6180102394, 0.3807097030, 56.2000661893],
    [0.6392465376, 0.3568762111, 46.7449180663],
    [0.6541312211, 0.3304864983, 37.5253619514],
    [0.6513011932, 0.2982923907, 29.0112327550],
    [0.6240464841, 0.2604983286, 21.5257326233],
    [0.5689038583, 0.2177976154, 15.2859556642],
    [0.4862834827, 0.1714159394, 10.4248256367],
    [0.3929374099, 0.1302167219, 7.0816774487],
    [0.3051023238, 0.1029277824, 5.1409529265],
    [0.2329099486, 0.0956627373, 4.5438122347],
    [0.1791773549, 0.1135730233, 5.3636173344],
    [0.1432673347, 0.1603384677, 7.9132248062],
    [0.1239755501, 0.2295641950, 12.3915762007],
    [0.1224345361, 0.3030255862, 18.5675544084],
    [0.1351817364, 0.3671543489, 26.0914601565],
    [0.1588347760, 0.4156495221, 34.6195840702],
    [0.1906772287, 0.4472383904, 43.8209851408],
    [0.2280587100, 0.4632349602, 53.2676996951],
    [0.2682566405, 0.4665703416, 62.4899236301],
    [0.3083325288, 0.4610500552, 71.0280520350],
    [0.3453631011, 0.4507624508, 78.5734463112],
    [0.3768947504, 0.4392730858, 84.9290894543],
    [0.4190274339, 0.4211980759, 93.7047814101],
    [0.4308502369, 0.4156868464, 96.2670533028],
    [0.4383011587, 0.4121716206, 97.9034844916],
    [0.4427818230, 0.4102385311, 98.8751498797],
    [0.4456004007, 0.4097689102, 99.4033613831],
    [0.4486303394, 0.4116701644, 99.6877378155],
    [0.4537901111, 0.4178477731, 99.8072572002],
    [0.4611153815, 0.4274840160, 99.8214471847],
    [0.4701200830, 0.4392543582, 99.7445358911],
    [0.4807039996, 0.4523674162, 99.5546803588],
    [0.4911779305, 0.4638709774, 99.2036151940],
    [0.5001541131, 0.4712677772, 98.5871479790],
    [0.5079560176, 0.4742785188, 97.5502477197],
    [0.5161816605, 0.4732184929, 95.7595281870],
    [0.5265860442, 0.4674805584, 92.6803860139],
    [0.5400275451, 0.4565935257, 87.9102107888],
    [0.5563793057, 0.4417408027, 81.5882247448],
    [0.5751676547, 0.4236415967, 73.9890785104],
    [0.5957376448, 0.4028761188, 65.4218805317],
    [0.6167674630, 0.3796608991, 56.2020483748],
    [0.6338605644, 0.3528264308, 46.7527014471],
    [0.6382416929, 0.3198907359, 37.5518858083],
    [0.6246352500, 0.2825501702, 29.0724176673],
    [0.5895648983, 0.2425868903, 21.6422577948],
    [0.5299694988, 0.2005639239, 15.4962244682],
    [0.4525144316, 0.1608223770, 10.7863065557],
    [0.3690172066, 0.1304138075, 7.7032602244],
    [0.2879872036, 0.1155838512, 6.1803778341],
    [0.2181932397, 0.1246558816, 6.3358225353],
    [0.1659564636, 0.1644879337, 8.4434184950],
    [0.1361029659, 0.2303008415, 12.6837360140],
    [0.1278770817, 0.3026928220, 18.7135976499],
    [0.1375688846, 0.3667488296, 26.1668350534],
    [0.1598651783, 0.4153805286, 34.6591979481],
    [0.1911040348, 0.4470956696, 43.8413984125],
    [0.2282316231, 0.4631674077, 53.2781154493],
    [0.2683238327, 0.4665413380, 62.4950391908],
    [0.3083588341, 0.4610379844, 71.0305766834],
    [0.3453739549, 0.4507572832, 78.5747370790],
    [0.3768993416, 0.4392708547, 84.9297484419],
    [0.4015600777, 0.4290081229, 90.0004882858],
    [0.4308423297, 0.4156741967, 96.2670887080],
    [0.4382707127, 0.4121247423, 97.9036189022],
    [0.4426560715, 0.4100493090, 98.8756896925],
    [0.4451363494, 0.4090805943, 99.4053435685],
    [0.4468948471, 0.4091249360, 99.6955211964],
    [0.4492777221, 0.4113392678, 99.8337810570],
    [0.4541238107, 0.4176665648, 99.8826320971],
    [0.4612901851, 0.4273803961, 99.8610610626],
    [0.4702096829, 0.4391954523, 99.7649491628],
    [0.4807493011, 0.4523340521, 99.5650961130],
    [0.4911999065, 0.4638530558, 99.2087307547],
    [0.5001647660, 0.4712584233, 98.5896726273],
    [0.5079613728, 0.4742735835, 97.5515384876],
    [0.5161843386, 0.4732159448, 95.7601871746],
    [0.5265873983, 0.4674792426, 92.6807219966],
    [0.5400139896, 0.4565767950, 87.9102461940],
    [0.5563226727, 0.4416761395, 81.5883591555],
    [0.5749088983, 0.4233718842, 73.9896183233],
    [0.5946641072, 0.4018662187, 65.4238627172],
    [0.6122247464, 0.3758403628, 56.2098317556],
    [0.6207523133, 0.3430744896, 46.7792253039],
    [0.6165376106, 0.3057352743, 37.6130707206],
    [0.5964996470, 0.2666277887, 29.1889428389],
    [0.5568061326, 0.2269366569, 21.8525265989],
    [0.4995795162, 0.1898739994, 15.8577053872],
    [0.4289341114, 0.1589866965, 11.4078893315],
    [0.3507977863, 0.1396782756, 8.7426851320],
    [0.2715906688, 0.1403609164, 7.9723881347],
    [0.2029229870, 0.1714054390, 9.4156236960],
    [0.1567652022, 0.2316082756, 13.2139297028],
    [0.1384244548, 0.3020638570, 19.0057574631],
    [0.1421330893, 0.3659753668, 26.3128782949],
    [0.1618157124, 0.4148713060, 34.7345728450],
    [0.1919304321, 0.4468193182, 43.8810122904],
    [0.2285701138, 0.4630351789, 53.2985287211],
    [0.2684604769, 0.4664823770, 62.5054549450],
    [0.3084122266, 0.4610134628, 71.0356922441],
    [0.3453951825, 0.4507471767, 78.5772617274],
    [0.3769083341, 0.4392664848, 84.9310392097],
    [0.4015640171, 0.4290061881, 90.0011472734],
    [0.4190292577, 0.4211971689, 93.7051173928],
    [0.4382627815, 0.4121125175, 97.9036543074],
    [0.4426255863, 0.4100033713, 98.8758241032],
    [0.4450105313, 0.4088934480, 99.4058833814],
    [0.4464306891, 0.4084408002, 99.6975033818],
    [0.4475420933, 0.4088018364, 99.8415644379],
    [0.4496114187, 0.4111685358, 99.9091559540],
    [0.4542988601, 0.4175715106, 99.9222459750],
    [0.4613801683, 0.4273270573, 99.8814743344],
    [0.4702553862, 0.4391654040, 99.7753649170],
    [0.4807715667, 0.4523176506, 99.5702116737],
    [0.4912107242, 0.4638442364, 99.2112554031],
    [0.5001702121, 0.4712536413, 98.5909633951],
    [0.5079641067, 0.4742710639, 97.5521974752],
    [0.5161857308, 0.4732146195, 95.7605231573],
    [0.5265747175, 0.4674626030, 92.6807574018],
    [0.5399619876, 0.4565126594, 87.9103806046],
    [0.5560894931, 0.4414101469, 81.5888989683],
    [0.5739603112, 0.4223850071, 73.9916005088],
    [0.5907348375, 0.3981828912, 65.4316460980],
    [0.6011154578, 0.3665955497, 56.2363556125],
    [0.6026410406, 0.3298894432, 46.8404102163],
    [0.5931835701, 0.2911087819, 37.7295958922],
    [0.5690140151, 0.2522378140, 29.3992116429],
    [0.5304191807, 0.2166222085, 22.2140075179],
    [0.4778968789, 0.1868377980, 16.4792881630],
    [0.4109803351, 0.1653523934, 12.4473142390],
    [0.3334985973, 0.1598106820, 10.5346954326],
    [0.2542185683, 0.1814672824, 11.0521892954],
    [0.1907902832, 0.2338890278, 14.1861349038],
    [0.1565182222, 0.3010256922, 19.5359511520],
    [0.1510107285, 0.3644830729, 26.6050381082],
    [0.1655514630, 0.4138974525, 34.8806160865],
    [0.1934960102, 0.4462957638, 43.9563871873],
    [0.2292257363, 0.4627790570, 53.3381425990],
    [0.2687280056, 0.4663669488, 62.5258682168],
    [0.3085208108, 0.4609636115, 71.0461079983],
    [0.3454382724, 0.4507266434, 78.5823772881],
    [0.3769259216, 0.4392579381, 84.9335638581],
    [0.4015717331, 0.4290023986, 90.0024380412],
    [0.4190327776, 0.4211954317, 93.7057763804],
    [0.4308440166, 0.4156733559, 96.2674246907],
    [0.4426176446, 0.4099913917, 98.8758595083],
    [0.4449800293, 0.4088480141, 99.4060177920],
    [0.4463048391, 0.4082547886, 99.6980431947],
    [0.4470778859, 0.4081197837, 99.8435466233],
    [0.4478757246, 0.4086351178, 99.9169393348],
    [0.4497864716, 0.4110789746, 99.9487698318],
    [0.4543889720, 0.4175225801, 99.9426592467],
    [0.4614260678, 0.4272998480, 99.8918900886],
    [0.4702778492, 0.4391506316, 99.7804804778],
    [0.4807825276, 0.4523095801, 99.5727363221],
    [0.4912162546, 0.4638397277, 99.2125461709],
    [0.5001729925, 0.4712512000, 98.5916223827],
    [0.5079655274, 0.4742697535, 97.5525334579],
    [0.5161736739, 0.4731981154, 95.7605585625],
    [0.5265260692, 0.4673988168, 92.6808918124],
    [0.5397478574, 0.4562488313, 87.9109204175],
    [0.5552344497, 0.4404367216, 81.5908811538],
    [0.5704849765, 0.4187825052, 73.9993838896],
    [0.5810923173, 0.3892392254, 65.4581699548],
    [0.5856415064, 0.3539904987, 56.2975405248],
    [0.5828834884, 0.3160598405, 46.9569353878],
    [0.5699179597, 0.2775703758, 37.9398646962],
    [0.5463585683, 0.2423365715, 29.7606925619],
    [0.5112374116, 0.2129564309, 22.8355902936],
    [0.4612814335, 0.1909921061, 17.5187130706],
    [0.3939248044, 0.1811486297, 14.2393245396],
    [0.3147596906, 0.1944227431, 13.6144965933],
    [0.2387685855, 0.2374854733, 15.8227005032],
    [0.1866594335, 0.2993965760, 20.5081563530],
    [0.1663410719, 0.3619373582, 27.1352317970],
    [0.1728415155, 0.4120062831, 35.1727758997],
    [0.1964988531, 0.4452926628, 44.1024304288],
    [0.2304685997, 0.4622935132, 53.4135174959],
    [0.2692463268, 0.4661433069, 62.5654820946],
    [0.3087334250, 0.4608660066, 71.0665212701],
    [0.3455259056, 0.4506848997, 78.5927930423],
    [0.3769616255, 0.4392405716, 84.9386794188],
    [0.4015868239, 0.4289949872, 90.0049626896],
    [0.4190396719, 0.4211920289, 93.7070671482],
    [0.4308472712, 0.4156717462, 96.2680836783],
    [0.4382643861, 0.4121117170, 97.9039902901],
    [0.4449720832, 0.4088361659, 99.4060531972],
    [0.4462743291, 0.4082096300, 99.6981776053],
    [0.4469520210, 0.4079343376, 99.8440864362],
    [0.4474114930, 0.4079541373, 99.9189215202],
    [0.4480507452, 0.4085476611, 99.9565532127],
    [0.4498765867, 0.4110328712, 99.9691831036],
    [0.4544349375, 0.4174976191, 99.9530750009],
    [0.4614486269, 0.4272864706, 99.8970056493],
    [0.4702889077, 0.4391433635, 99.7830051261],
    [0.4807881312, 0.4523054541, 99.5740270899],
    [0.4912190780, 0.4638374259, 99.2132051585],
    [0.5001744367, 0.4712499301, 98.5919583655],
    [0.5079539507, 0.4742534798, 97.5525688631],
    [0.5161274177, 0.4731348481, 95.7606929731],
    [0.5263257351, 0.4671364220, 92.6814316253],
    [0.5389625062, 0.4552832153, 87.9129026029],
    [0.5520995113, 0.4368810913, 81.5986645346],
    [0.5619345413, 0.4100133140, 74.0259077464],
    [0.5675823661, 0.3769710317, 65.5193548672],
    [0.5685933341, 0.3406267487, 56.4140656964],
    [0.5629208664, 0.3030360692, 47.1672041919],
    [0.5504138295, 0.2679553332, 38.3013456152],
    [0.5296394181, 0.2383085849, 30.3822753377],
    [0.4964161219, 0.2155659489, 23.8750152012],
    [0.4454157913, 0.2031573065, 19.3107233712],
    [0.3750607325, 0.2093929165, 17.3191257003],
    [0.2965971707, 0.2427172208, 18.3850078011],
    [0.2299148400, 0.2973603439, 22.1447219523],
    [0.1921676070, 0.3577260284, 28.1074369980],
    [0.1855053917, 0.4087449274, 35.7029695886],
    [0.2023750962, 0.4433367943, 44.3945902421],
    [0.2328553392, 0.4613619542, 53.5595607374],
    [0.2702294311, 0.4657191125, 62.6408569916],
    [0.3091454441, 0.4606768553, 71.1061351479],
    [0.3456975106, 0.4506031622, 78.6132063141],
    [0.3770342378, 0.4392052665, 84.9490951730],
    [0.4016174618, 0.4289799256, 90.0100782503],
    [0.4190531556, 0.4211853739, 93.7095917966],
    [0.4308536459, 0.4156685934, 96.2693744461],
    [0.4382674814, 0.4121101850, 97.9046492777],
    [0.4426192023, 0.4099906144, 98.8761954911],
    [0.4462663809, 0.4081978537, 99.6982130105],
    [0.4469215072, 0.4078893163, 99.8442208468],
    [0.4472856208, 0.4077689823, 99.9194613331],
    [0.4475865015, 0.4078672429, 99.9585353981],
    [0.4481408443, 0.4085026407, 99.9769664844],
    [0.4499225541, 0.4110093520, 99.9795988578],
    [0.4544575290, 0.4174853462, 99.9581905617],
    [0.4614597333, 0.4272798897, 99.8995302977],
    [0.4702945612, 0.4391396478, 99.7842958939],
    [0.4807909919, 0.4523033478, 99.5746860775],
    [0.4912205441, 0.4638362281, 99.2135411412],
    [0.5001633206, 0.4712340335, 98.5919937707],
    [0.5079095353, 0.4741910958, 97.5527032737],
    [0.5159369235, 0.4728745851, 95.7612327860],
    [0.5255908667, 0.4661759762, 92.6834138107],
    [0.5360814803, 0.4517545381, 87.9206859838],
    [0.5443717152, 0.4282103875, 81.6251883915],
    [0.5499024723, 0.3979318188, 74.0870926588],
    [0.5525887987, 0.3638628806, 65.6358800387],
    [0.5511871868, 0.3278816585, 56.6243345004],
    [0.5459714797, 0.2935635630, 47.5286851109],
    [0.5358460686, 0.2636637840, 38.9229283910],
    [0.5166151401, 0.2398327020, 31.4217002452],
    [0.4821720114, 0.2249849565, 25.6670255018],
    [0.4275488410, 0.2258055350, 22.3905245319],
    [0.3556023363, 0.2497908708, 22.0896369081],
    [0.2832822738, 0.2955681775, 24.7070292503],
    [0.2298796685, 0.3518117435, 29.7440025974],
    [0.2070589687, 0.4032536852, 36.6751747896],
    [0.2126353803, 0.4399401275, 44.9247839310],
    [0.2375366729, 0.4595403501, 53.8517205507],
    [0.2721191636, 0.4649044098, 62.7869002331],
    [0.3099272548, 0.4603179299, 71.1815100449],
    [0.3460301166, 0.4504447335, 78.6528201920],
    [0.3771764372, 0.4391361325, 84.9695084447],
    [0.4016797709, 0.4289493069, 90.0204940045],
    [0.4190805324, 0.4211718481, 93.7147073573],
    [0.4308661136, 0.4156624273, 96.2718990945],
    [0.4382735440, 0.4121071844, 97.9059400455],
    [0.4426222065, 0.4099891271, 98.8768544787],
    [0.4449736158, 0.4088354009, 99.4063891800],
    [0.4469135580, 0.4078775757, 99.8442562520],
    [0.4472551052, 0.4077240316, 99.9195957437],
    [0.4474606257, 0.4076822405, 99.9590752110],
    [0.4476765944, 0.4078225119, 99.9789486699],
    [0.4481868036, 0.4084796739, 99.9873822386],
    [0.4499451464, 0.4109977876, 99.9847144185],
    [0.4544686516, 0.4174793095, 99.9607152100],
    [0.4614654112, 0.4272765253, 99.9008210655],
    [0.4702974475, 0.4391377509, 99.7849548815],
    [0.4807924768, 0.4523022508, 99.5750220603],
    [0.4912099699, 0.4638209267, 99.2135765464],
    [0.5001206713, 0.4711730946, 98.5921281813],
    [0.5077266143, 0.4739344636, 97.5532430866],
    [0.5152380673, 0.4719218913, 95.7632149714],
    [0.5228939360, 0.4626651284, 92.6911971916],
    [0.5289693942, 0.4431385034, 87.9472098406],
    [0.5334615789, 0.4162265557, 81.6863733038],
    [0.5364751682, 0.3849495584, 74.2036178303],
    [0.5371582099, 0.3512443643, 65.8461488428],
    [0.5362626178, 0.3184433299, 56.9858154194],
    [0.5331869366, 0.2890404916, 48.1502678866],
    [0.5244118595, 0.2643937791, 39.9623532985],
    [0.5040187384, 0.2472300578, 33.2137105458],
    [0.4659051638, 0.2432282623, 28.7468266625],
    [0.4082785966, 0.2589729240, 27.1610357397],
    [0.3392339178, 0.2951015924, 28.4116583573],
    [0.2775105972, 0.3449101697, 32.3063098953],
    [0.2390379826, 0.3952889635, 38.3117403890],
    [0.2302540953, 0.4341535701, 45.8969891320],
    [0.2457453050, 0.4563606389, 54.3819142395],
    [0.2758324116, 0.4633080084, 63.0790600463],
    [0.3114311801, 0.4596280547, 71.3275532864],
    [0.3466614467, 0.4501440072, 78.7281950889],
    [0.3774520847, 0.4390021149, 85.0091223226],
    [0.4018017983, 0.4288893474, 90.0409072763],
    [0.4191362092, 0.4211443521, 93.7251231115],
    [0.4308914287, 0.4156498940, 96.2770146553],
    [0.4382854013, 0.4121013158, 97.9084646939],
    [0.4426280908, 0.4099862141, 98.8781452465],
    [0.4449765716, 0.4088339375, 99.4070481676],
    [0.4462678998, 0.4081970955, 99.6985489932],
    [0.4472471555, 0.4077123094, 99.9196311489],
    [0.4474301091, 0.4076373268, 99.9592096216],
    [0.4475507168, 0.4076375881, 99.9794884827],
    [0.4477225507, 0.4077996927, 99.9893644241],
    [0.4482093919, 0.4084683809, 99.9924977993],
    [0.4499562697, 0.4109920998, 99.9872390669],
    [0.4544743379, 0.4174762233, 99.9620059779],
    [0.4614683100, 0.4272748077, 99.9014800531],
    [0.4702989451, 0.4391367621, 99.7852908643],
    [0.4807825409, 0.4522877578, 99.5750574654],
    [0.4911693988, 0.4637622696, 99.2137109570],
    [0.4999450157, 0.4709224040, 98.5926679942],
    [0.5070554767, 0.4729950210, 97.5552252720],
    [0.5126725405, 0.4684386690, 95.7709983523],
    [0.5162293963, 0.4540851219, 92.7177210484],
    [0.5189038750, 0.4312031284, 88.0083947530],
    [0.5212346345, 0.4032954615, 81.8028984754],
    [0.5225709546, 0.3723655111, 74.4138866344],
    [0.5238242822, 0.3417713472, 66.2076297618],
    [0.5249126368, 0.3137055628, 57.6073981952],
    [0.5230824517, 0.2891634424, 49.1896927942],
    [0.5132891010, 0.2702978916, 41.7543635991],
    [0.4894845022, 0.2621440824, 36.2935117065],
    [0.4478234097, 0.2704972968, 33.5173378703],
    [0.3906324624, 0.2970334902, 33.4830571888],
    [0.3288506541, 0.3386021447, 36.0109390023],
    [0.2803224136, 0.3854533595, 40.8740476869],
    [0.2567643412, 0.4255895606, 47.5335547313],
    [0.2599462396, 0.4508961084, 55.3541194405],
    [0.2823656204, 0.4605108720, 63.6092537352],
    [0.3143904101, 0.4582743015, 71.6197130996],
    [0.3478765782, 0.4495656821, 78.8742383304],
    [0.3779754287, 0.4387476627, 85.0844972195],
    [0.4020383655, 0.4287731039, 90.0805211542],
    [0.4192452505, 0.4210905066, 93.7455363833],
    [0.4309429119, 0.4156244163, 96.2874304095],
    [0.4383094776, 0.4120893868, 97.9135802546],
    [0.4426395994, 0.4099805167, 98.8806698949],
    [0.4449823610, 0.4088310713, 99.4083389354],
    [0.4462708292, 0.4081956451, 99.6992079808],
    [0.4469150702, 0.4078768209, 99.8445922347],
    [0.4474221591, 0.4076256143, 99.9592450268],
    [0.4475201997, 0.4075926935, 99.9796228934],
    [0.4475966721, 0.4076148089, 99.9899042369],
    [0.4477451375, 0.4077884722, 99.9944799848],
    [0.4482205133, 0.4084628268, 99.9950224477],
    [0.4499619564, 0.4109891920, 99.9885298347],
    [0.4544772409, 0.4174746477, 99.9626649654],
    [0.4614698137, 0.4272739115, 99.9018160358],
    [0.4702896481, 0.4391231339, 99.7853262695],
    [0.4807444171, 0.4522321990, 99.5751918761],
    [0.4910022935, 0.4635209614, 99.2142507699],
    [0.4993004727, 0.4700046725, 98.5946501796],
    [0.5045911230, 0.4695597158, 97.5630086529],
    [0.5063279880, 0.4599212253, 95.7975222091],
    [0.5067805059, 0.4421812029, 92.7789059608],
    [0.5075869933, 0.4182856834, 88.1249199245],
    [0.5085116725, 0.3906966605, 82.0131672794],
    [0.5104803403, 0.3628204334, 74.7753675534],
    [0.5136127756, 0.3368354846, 66.8292125375],
    [0.5158843737, 0.3133529288, 58.6468231028],
    [0.5132013326, 0.2939466917, 50.9817030948],
    [0.5003600106, 0.2827213758, 44.8341647598],
    [0.4730080081, 0.2848303607, 41.0640229143],
    [0.4303714236, 0.3023743400, 39.8393593195],
    [0.3774232510, 0.3345492319, 41.0823378339],
    [0.3260105691, 0.3754708544, 44.5786767939],
    [0.2916638432, 0.4146686938, 50.0958620292],
    [0.2815681890, 0.4426894679, 56.9906850399],
    [0.2937361910, 0.4556720683, 64.5814589362],
    [0.3196105521, 0.4558959082, 72.1499067885],
    [0.3502699567, 0.4484297525, 79.1663981437],
    [0.3789831205, 0.4382581499, 85.2305404610],
    [0.4024875911, 0.4285523589, 90.1558960511],
    [0.4194566556, 0.4209861094, 93.7851502612],
    [0.4310437422, 0.4155745224, 96.3078436812],
    [0.4383584414, 0.4120651376, 97.9239960088],
    [0.4426629681, 0.4099689353, 98.8857854556],
    [0.4449936838, 0.4088254654, 99.4108635838],
    [0.4462765668, 0.4081928045, 99.7004987486],
    [0.4469179864, 0.4078753770, 99.8452512223],
    [0.4472486642, 0.4077115564, 99.9199671317],
    [0.4475122496, 0.4075809860, 99.9796582985],
    [0.4475661548, 0.4075699241, 99.9900386476],
    [0.4476192584, 0.4076036081, 99.9950197977],
    [0.4477562581, 0.4077829538, 99.9970046332],
    [0.4482261990, 0.4084599874, 99.9963132155],
    [0.4499648595, 0.4109877075, 99.9891888223],
    [0.4544787465, 0.4174738249, 99.9630009482],
    [0.4614610477, 0.4272610287, 99.9018514410],
    [0.4702539743, 0.4390708896, 99.7854606801],
    [0.4805873809, 0.4520036309, 99.5757316889],
    [0.4903890506, 0.4626375285, 99.2162329554],
    [0.4969332045, 0.4666482458, 98.6024335604],
    [0.4984931475, 0.4611558677, 97.5895325097],
    [0.4973212500, 0.4480920156, 95.8587071215],
    [0.4961315409, 0.4292713960, 92.8954311323],
    [0.4957660524, 0.4056534575, 88.3351887286],
    [0.4973912551, 0.3810661001, 82.3746481984],
    [0.5011649269, 0.3577066090, 75.3969503291],
    [0.5054419829, 0.3361050075, 67.8686374451],
    [0.5070133847, 0.3172854292, 60.4388334034],
    [0.5016552111, 0.3044964042, 54.0615042555],
    [0.4855236787, 0.3019113430, 49.6046759676],
    [0.4565822622, 0.3117192597, 47.3860443635],
    [0.4161119020, 0.3344769667, 47.4386399645],
    [0.3704817749, 0.3673030177, 49.6500756254],
    [0.3312199954, 0.4030141997, 53.8004911363],
    [0.3105107157, 0.4319878414, 59.5529923378],
    [0.3112157105, 0.4483259464, 66.2180245356],
    [0.3287383984, 0.4517616047, 73.1221119895],
    [0.3545000661, 0.4464303744, 79.6965918325],
    [0.3809692949, 0.4372961178, 85.5227002743],
    [0.4033528062, 0.4281275947, 90.3019392926],
    [0.4198581480, 0.4207878365, 93.8605251581],
    [0.4312392362, 0.4154777827, 96.3474575591],
    [0.4384543384, 0.4120176492, 97.9444092806],
    [0.4427104927, 0.4099453931, 98.8962012098],
    [0.4450166757, 0.4088140699, 99.4159791445],
    [0.4462877885, 0.4081872486, 99.7030233970],
    [0.4469236983, 0.4078725491, 99.8465419901],
    [0.4472515736, 0.4077101159, 99.9206261192],
    [0.4474236660, 0.4076248622, 99.9595810095],
    [0.4475582046, 0.4075582191, 99.9900740527],
    [0.4475887410, 0.4075587281, 99.9951542083],
    [0.4476303788, 0.4075980995, 99.9975444460],
    [0.4477619434, 0.4077801326, 99.9982954010],
    [0.4482291017, 0.4084585378, 99.9969722031],
    [0.4499663650, 0.4109869317, 99.9895248050],
    [0.4544703950, 0.4174615372, 99.9630363534],
    [0.4614274103, 0.4272116420, 99.9019858516],
    [0.4701070193, 0.4388559517, 99.7860004930],
    [0.4800110032, 0.4511667818, 99.5777138744],
    [0.4881360634, 0.4594059275, 99.2240163362],
    [0.4910719276, 0.4584340601, 98.6289574173],
    [0.4898276124, 0.4494758523, 97.6507174221],
    [0.4871528786, 0.4352461398, 95.9752322930],
    [0.4849760951, 0.4166145841, 93.1056999364],
    [0.4853908901, 0.3959426180, 88.6966696476],
    [0.4887783701, 0.3757985727, 82.9962309742],
    [0.4936706633, 0.3566751333, 76.4363752367],
    [0.4973785772, 0.3393856391, 69.6606477457],
    [0.4966093917, 0.3264184752, 63.5186345640],
    [0.4883136222, 0.3210209065, 58.8320154633],
    [0.4704485083, 0.3248772686, 55.9266974168],
    [0.4424760177, 0.3392284739, 54.9853250085],
    [0.4069221311, 0.3631944486, 56.0063777561],
    [0.3707397965, 0.3926295665, 58.8718899678],
    [0.3439990766, 0.4201937496, 63.2576214448],
    [0.3349341460, 0.4385905743, 68.7803318335],
    [0.3428755662, 0.4454358345, 74.7586775889],
    [0.3619227462, 0.4429431188, 80.6687970335],
    [0.3844844860, 0.4356008359, 86.0528939632],
    [0.4050589348, 0.4272925577, 90.5940991058],
    [0.4206315640, 0.4204062628, 94.0065683996],
    [0.4316105395, 0.4152940386, 96.4228324560],
    [0.4386402722, 0.4119255711, 97.9840231585],
    [0.4428035715, 0.4098992890, 98.9166144815],
    [0.4450634338, 0.4087909056, 99.4263948987],
    [0.4463105750, 0.4081759546, 99.7081389578],
    [0.4469348696, 0.4078670181, 99.8490666385],
    [0.4472572723, 0.4077072945, 99.9219168871],
    [0.4474265719, 0.4076234234, 99.9602399971],
    [0.4475137555, 0.4075802343, 99.9799942813],
    [0.4475807908, 0.4075470243, 99.9951896135],
    [0.4475998614, 0.4075532218, 99.9976788567],
    [0.4476360640, 0.4075952832, 99.9988352139],
    [0.4477648459, 0.4077786924, 99.9989543886],
    [0.4482306068, 0.4084577800, 99.9973081859],
    [0.4499582778, 0.4109750284, 99.9895602102],
    [0.4544383474, 0.4174144315, 99.9631707640],
    [0.4612888350, 0.4270084550, 99.9025256645],
    [0.4695675561, 0.4380689478, 99.7879826784],
    [0.4778926530, 0.4481048565, 99.5854972552],
    [0.4825535048, 0.4514934078, 99.2505401930],
    [0.4827341221, 0.4470099375, 98.6901423297],
    [0.4800307749, 0.4367802944, 97.7672425936],
    [0.4764779424, 0.4226317975, 96.1855010970],
    [0.4751530366, 0.4068472083, 93.4671808554],
    [0.4773192368, 0.3905510912, 89.3182524233],
    [0.4818151159, 0.3745292808, 84.0356558818],
    [0.4862458054, 0.3594546292, 78.2283855373],
    [0.4878973918, 0.3474410917, 72.7404489064],
    [0.4845474203, 0.3409104421, 68.2891457718],
    [0.4746197839, 0.3409235583, 65.1540369125],
    [0.4571341333, 0.3486197850, 63.5259780618],
    [0.4324832938, 0.3642740431, 63.5530628001],
    [0.4039662810, 0.3860277242, 65.2281920984],
    [0.3782255390, 0.4091772679, 68.3290202764],
    [0.3628482219, 0.4276217724, 72.4849609405],
    [0.3622637160, 0.4369570222, 77.3209848868],
    [0.3734834198, 0.4375787390, 82.3053626329],
    [0.3906682429, 0.4326373350, 87.0250991641],
    [0.4080812615, 0.4258200483, 91.1242927947],
    [0.4221570986, 0.4196560275, 94.2987282129],
    [0.4323258795, 0.4149403982, 96.5688756975],
    [0.4389934346, 0.4117506727, 98.0593980554],
    [0.4429840437, 0.4098098936, 98.9562283594],
    [0.4451550117, 0.4087455415, 99.4468081704],
    [0.4463569154, 0.4081529968, 99.7185547119],
    [0.4469575539, 0.4078557748, 99.8541821993],
    [0.4472684177, 0.4077017764, 99.9244415354],
    [0.4474322636, 0.4076206055, 99.9615307650],
    [0.4475166596, 0.4075787965, 99.9806532689],
    [0.4475597101, 0.4075574676, 99.9904100355],
    [0.4475919112, 0.4075415186, 99.9977142618],
    [0.4476055465, 0.4075504067, 99.9989696245],
    [0.4476389664, 0.4075938455, 99.9994942014],
    [0.4477663509, 0.4077779394, 99.9992903713],
    [0.4482226205, 0.4084460245, 99.9973435911],
    [0.4499272434, 0.4109293958, 99.9896946209],
    [0.4543063142, 0.4172206252, 99.9637105769],
    [0.4607800603, 0.4262644294, 99.9045078500],
    [0.4675840739, 0.4351886771, 99.7957660592],
    [0.4726386777, 0.4406033528, 99.6120211121],
    [0.4746018301, 0.4404801002, 99.3117251054],
    [0.4732944624, 0.4345825257, 98.8066675012],
    [0.4697280388, 0.4243007349, 97.9775113976],
    [0.4670546111, 0.4128749794, 96.5469820161],
    [0.4674829527, 0.4013693806, 94.0887636311],
    [0.4707651009, 0.3891008225, 90.3576773309],
    [0.4748920388, 0.3769248393, 85.8276661824],
    [0.4774999075, 0.3666889163, 81.3081866980],
    [0.4768953629, 0.3603787943, 77.5109601142],
    [0.4721170754, 0.3584334351, 74.6111672210],
    [0.4623515195, 0.3616246442, 72.7533175575],
    [0.4472430063, 0.3704770148, 72.0937158534],
    [0.4278490961, 0.3845784430, 72.7748771425],
    [0.4076410518, 0.4014876258, 74.6853224070],
    [0.3919171729, 0.4170717342, 77.5563597720],
    [0.3853862340, 0.4272619405, 81.0256139938],
    [0.3894642546, 0.4303343404, 84.8676699308],
    [0.4003378145, 0.4280630115, 88.6616647635],
    [0.4134071837, 0.4232423783, 92.0964979957],
    [0.4248610690, 0.4183325692, 94.8289219017],
    [0.4337370974, 0.4142450453, 96.8610355108],
    [0.4396738695, 0.4114140430, 98.2054412969],
    [0.4433268419, 0.4096400862, 99.0316032563],
    [0.4453325753, 0.4086575801, 99.4864220483],
    [0.4464476755, 0.4081080369, 99.7389679837],
    [0.4470036866, 0.4078329198, 99.8645979535],
    [0.4472910495, 0.4076905590, 99.9295570962],
    [0.4474433955, 0.4076150941, 99.9640554133],
    [0.4475223478, 0.4075759803, 99.9819440367],
    [0.4475626132, 0.4075560302, 99.9910690231],
    [0.4475822960, 0.4075462730, 99.9955255962],
    [0.4475975963, 0.4075387039, 99.9990050297],
    [0.4476084490, 0.4075489696, 99.9996286121],
    [0.4476404714, 0.4075930939, 99.9998301842],
    [0.4477583916, 0.4077662235, 99.9993257765],
    [0.4481919734, 0.4084009586, 99.9974780017],
    [0.4497993804, 0.4107416476, 99.9902344337],
    [0.4538215011, 0.4165109122, 99.9656927623],
    [0.4589087444, 0.4235408558, 99.9122912308],
    [0.4626595647, 0.4281278667, 99.8222899161],
    [0.4651427328, 0.4301521218, 99.6732060244],
    [0.4655833791, 0.4284887568, 99.4282502769],
    [0.4633499903, 0.4223569048, 99.0169363052],
    [0.4606149306, 0.4146368300, 98.3389923167],
    [0.4596755746, 0.4073730628, 97.1685647918],
    [0.4612320803, 0.3997937731, 95.1281885387],
    [0.4642287315, 0.3912107048, 92.1496876315],
    [0.4667273042, 0.3835353334, 88.9074673430],
    [0.4673580171, 0.3784385449, 86.0786979058],
    [0.4655577545, 0.3760558587, 83.8329815634],
    [0.4609227551, 0.3767090236, 82.2104478660],
    [0.4530363399, 0.3807874251, 81.3210553491],
    [0.4420133226, 0.3883914562, 81.3155301958],
    [0.4291890913, 0.3986397225, 82.2320074510],
    [0.4173403464, 0.4093605636, 83.9126619027],
    [0.4098168108, 0.4177712237, 86.0970128253],
    [0.4087109765, 0.4219753162, 88.5722990378],
    [0.4137796216, 0.4218574978, 91.2239720614],
    [0.4217579247, 0.4192555594, 93.7330635951],
    [0.4296312531, 0.4160139608, 95.8011271027],
    [0.4362393302, 0.4130181727, 97.3912291997],
    [0.4410163556, 0.4107521258, 98.4976011102],
    [0.4439873328, 0.4093132479, 99.1776464978],
    [0.4456698536, 0.4084904941, 99.5617969452],
    [0.4466236541, 0.4080208589, 99.7785818616],
    [0.4470940398, 0.4077881613, 99.8850112252],
    [0.4473370753, 0.4076677570, 99.9399728504],
    [0.4474659997, 0.4076038904, 99.9691709741],
    [0.4475334727, 0.4075704723, 99.9844686851],
    [0.4475682995, 0.4075532150, 99.9923597909],
    [0.4475851987, 0.4075448358, 99.9961845838],
    [0.4475934162, 0.4075407673, 99.9980502446],
    [0.4476004987, 0.4075372669, 99.9996640173],
    [0.4476099539, 0.4075482183, 99.9999645948],
    [0.4476325194, 0.4075813887, 99.9998655894],
    [0.4477278479, 0.4077213093, 99.9994601871],
    [0.4480657039, 0.4082155412, 99.9980178146],
    [0.4493298431, 0.4100540956, 99.9922166192],
    [0.4520377948, 0.4139124852, 99.9734761431],
    [0.4542585225, 0.4168606395, 99.9388150876],
    [0.4556213293, 0.4182808650, 99.8834748285],
    [0.4566222071, 0.4187607199, 99.7897311960],
    [0.4560619842, 0.4166830180, 99.6385190810],
    [0.4545360144, 0.4128849852, 99.3784172243],
    [0.4534621600, 0.4091765056, 98.9605750924],
    [0.4536443836, 0.4057367771, 98.2079896994],
    [0.4549822159, 0.4017061170, 96.9201988393],
    [0.4565139326, 0.3973600849, 95.2294887922],
    [0.4572750308, 0.3943808584, 93.6779785508],
    [0.4569346814, 0.3926889668, 92.4007193550],
    [0.4553565470, 0.3924111825, 91.4322622084],
    [0.4523729111, 0.3936456183, 90.7781856576],
    [0.4478662919, 0.3965471657, 90.5428696915],
    [0.4421676204, 0.4009153331, 90.7726605043],
    [0.4362018470, 0.4060442785, 91.4593469467],
    [0.4314532634, 0.4106905261, 92.4533149560],
    [0.4292599231, 0.4137182521, 93.6436978694],
    [0.4300790070, 0.4146630709, 94.9286011685],
    [0.4334100326, 0.4138338908, 96.2953708930],
    [0.4371234419, 0.4124239553, 97.4376927021],
    [0.4406566680, 0.4108678190, 98.3634344006],
    [0.4433972137, 0.4095841411, 99.0277947990],
    [0.4452905388, 0.4086705809, 99.4698063111],
    [0.4463197218, 0.4081688902, 99.7078401867],
    [0.4469579244, 0.4078552598, 99.8539567585],
    [0.4472692298, 0.4077013739, 99.9246251031],
    [0.4474272192, 0.4076231022, 99.9603861221],
    [0.4475119695, 0.4075811161, 99.9795867283],
    [0.4475560627, 0.4075592756, 99.9895842458],
    [0.4475794209, 0.4075477088, 99.9948844393],
    [0.4475908841, 0.4075420210, 99.9974753516],
    [0.4475963187, 0.4075393303, 99.9987092322],
    [0.4475991013, 0.4075379526, 99.9993410124],
    [0.4476020037, 0.4075365157, 100.0000000000],
];

/// Optimal colour stimuli for illuminant C.
pub static ILLUMINANT_C_OPTIMAL_COLOUR_STIMULI: [[f64; 3]; OPTIMAL_COLOUR_STIMULI_SAMPLES] = [
    [0.3101243776, 0.3163094287, 0.0000000000],
    [0.1741122566, 0.0049637266, 0.0001208802],
    [0.1738008438, 0.0049154139, 0.0005342399],
    [0.1733368865, 0.0047967440, 0.0023543748],
    [0.1725765508, 0.0047993019, 0.0091600345],
    [0.1714074339, 0.0051021710, 0.0368557876],
    [0.1688775207, 0.0069002439, 0.1224619015],
    [0.1644117564, 0.0108575583, 0.2624706895],
    [0.1566409326, 0.0177048050, 0.4425700086],
    [0.1439603960, 0.0297029703, 0.6937228530],
    [0.1241184767, 0.0578025134, 1.0578967315],
    [0.0912935157, 0.1327020552, 1.6178017047],
    [0.0453907347, 0.2949759646, 2.3582457493],
    [0.0081680280, 0.5384230705, 3.4008292956],
    [0.0138702461, 0.7501864280, 4.8330391921],
    [0.0743024239, 0.8338030815, 6.4618790362],
    [0.1547220612, 0.8058635454, 7.9343259852],
    [0.2296196726, 0.7543290899, 9.1485194336],
    [0.3016038688, 0.6923076923, 9.8309094136],
    [0.3731015439, 0.6244508598, 9.8407488945],
    [0.4440624636, 0.5547139028, 9.1472232820],
    [0.5124863671, 0.4865907883, 7.9916196408],
    [0.5751513114, 0.4242322349, 6.6265654226],
    [0.6270365998, 0.3724911452, 5.3161655949],
    [0.6657635762, 0.3340106512, 4.1763505824],
    [0.6915039979, 0.3083422356, 3.1526632352],
    [0.7079177916, 0.2920271089, 2.1903082766],
    [0.7190329416, 0.2809349515, 1.4431426531],
    [0.7259923175, 0.2740076825, 0.8863985990],
    [0.7299690128, 0.2700309872, 0.5036112328],
    [0.7319932998, 0.2680067002, 0.2593805891],
    [0.7334169672, 0.2665830328, 0.1341235085],
    [0.7343901650, 0.2656098350, 0.0618435233],
    [0.7346872777, 0.2653127223, 0.0293965857],
    [0.7346783403, 0.2653216597, 0.0142190080],
    [0.7346680182, 0.2653319818, 0.0067165165],
    [0.7346938776, 0.2653061224, 0.0031453278],
    [0.7348242812, 0.2651757188, 0.0014383056],
    [0.7345132743, 0.2654867257, 0.0006672363],
    [0.7345132743, 0.2654867257, 0.0003274192],
    [0.7345132743, 0.2654867257, 0.0001639913],
    [0.7368421053, 0.2631578947, 0.0000832636],
    [0.1738578476, 0.0049242575, 0.0006551201],
    [0.1734209978, 0.0048182578, 0.0028886146],
    [0.1727320842, 0.0047987787, 0.0115144093],
    [0.1716517787, 0.0050388715, 0.0460158222],
    [0.1696093671, 0.0063801022, 0.1593176892],
    [0.1663023393, 0.0091822278, 0.3849325910],
    [0.1604612998, 0.0143384957, 0.7050406980],
    [0.1505159513, 0.0235001858, 1.1362928615],
    [0.1352429430, 0.0420483711, 1.7516195845],
    [0.1109949795, 0.0877475277, 2.6756984363],
    [0.0731135737, 0.1969711516, 3.9760474540],
    [0.0289621673, 0.4024234753, 5.7590750449],
    [0.0110473323, 0.6453518358, 8.2338684876],
    [0.0468699205, 0.7958462477, 11.2949182282],
    [0.1193017301, 0.8181693410, 14.3962050214],
    [0.1960604405, 0.7774200367, 17.0828454188],
    [0.2684445535, 0.7208776727, 18.9794288472],
    [0.3392127928, 0.6566139099, 19.6716583081],
    [0.4093861849, 0.5887920709, 18.9879721765],
    [0.4782055138, 0.5207209442, 17.1388429229],
    [0.5430331175, 0.4561933916, 14.6181850635],
    [0.5999238731, 0.3995285207, 11.9427310175],
    [0.6451213079, 0.3545215393, 9.4925161773],
    [0.6773432177, 0.3224634025, 7.3290138176],
    [0.6984495506, 0.3014384342, 5.3429715118],
    [0.7124359864, 0.2875182604, 3.6334509297],
    [0.7217220865, 0.2782582129, 2.3295412521],
    [0.7274465636, 0.2725534364, 1.3900098318],
    [0.7306605952, 0.2693394048, 0.7629918218],
    [0.7324802534, 0.2675197466, 0.3935040976],
    [0.7337248595, 0.2662751405, 0.1959670318],
    [0.7344859642, 0.2655140358, 0.0912401090],
    [0.7346843641, 0.2653156359, 0.0436155937],
    [0.7346750289, 0.2653249711, 0.0209355244],
    [0.7346762663, 0.2653237337, 0.0098618442],
    [0.7347348109, 0.2652651891, 0.0045836333],
    [0.7347258035, 0.2652741965, 0.0021055418],
    [0.7345132743, 0.2654867257, 0.0009946554],
    [0.7345132743, 0.2654867257, 0.0004914105],
    [0.7353021025, 0.2646978975, 0.0002472550],
    [0.1813297331, 0.0082752807, 0.0002041439],
    [0.1734479812, 0.0048239362, 0.0030094948],
    [0.1727783975, 0.0048038329, 0.0120486491],
    [0.1717377288, 0.0050265216, 0.0483701969],
    [0.1698200552, 0.0062678558, 0.1684777237],
    [0.1670527083, 0.0085825233, 0.4217883787],
    [0.1626933631, 0.0123657992, 0.8275025996],
    [0.1551475995, 0.0192862376, 1.3987635510],
    [0.1432677546, 0.0329188905, 2.1941895931],
    [0.1252928447, 0.0625722578, 3.3694212892],
    [0.0973676525, 0.1307930605, 5.0339441856],
    [0.0576350916, 0.2783494410, 7.3768767496],
    [0.0242772093, 0.5103789044, 10.5921142369],
    [0.0349504474, 0.7165646299, 14.6957475238],
    [0.0910450170, 0.7999492270, 19.2292442135],
    [0.1643143148, 0.7921208611, 23.5447244550],
    [0.2374918384, 0.7440089237, 26.9137548324],
    [0.3076320377, 0.6847718742, 28.8201777417],
    [0.3764355701, 0.6204382954, 28.8188815901],
    [0.4441754049, 0.5543061677, 26.9795918174],
    [0.5094065748, 0.4896669927, 23.7654083455],
    [0.5689182897, 0.4304010434, 19.9343506583],
    [0.6193417893, 0.3802055220, 16.1190815999],
    [0.6579386291, 0.3417604216, 12.6451794124],
    [0.6849294300, 0.3149115006, 9.5193220942],
    [0.7030745227, 0.2968314170, 6.7861141649],
    [0.7151989209, 0.2847646509, 4.5198495288],
    [0.7232245580, 0.2767593306, 2.8331524849],
    [0.7281717718, 0.2718282282, 1.6493904209],
    [0.7310763057, 0.2689236943, 0.8971153304],
    [0.7327412604, 0.2672587396, 0.4553476208],
    [0.7338507938, 0.2661492062, 0.2253636175],
    [0.7345119184, 0.2654880816, 0.1054591169],
    [0.7346821830, 0.2653178170, 0.0503321101],
    [0.7346774910, 0.2653225090, 0.0240808522],
    [0.7346951151, 0.2653048849, 0.0113001498],
    [0.7347066804, 0.2652933196, 0.0052508696],
    [0.7346972219, 0.2653027781, 0.0024329610],
    [0.7345132743, 0.2654867257, 0.0011586468],
    [0.7348532452, 0.2651467548, 0.0005746742],
    [0.1948427772, 0.0145583845, 0.0003681352],
    [0.1751935924, 0.0055369465, 0.0007383837],
    [0.1727912240, 0.0048053705, 0.0121695294],
    [0.1717607703, 0.0050252807, 0.0489044368],
    [0.1698831216, 0.0062414747, 0.1708320984],
    [0.1672592147, 0.0084410893, 0.4309484132],
    [0.1635423604, 0.0116581161, 0.8643583872],
    [0.1578468424, 0.0168512050, 1.5212254525],
    [0.1488952355, 0.0270472619, 2.4566602825],
    [0.1352314199, 0.0483475130, 3.8119912978],
    [0.1149635945, 0.0926159704, 5.7276670385],
    [0.0847927061, 0.1882588351, 8.4347734811],
    [0.0490767148, 0.3706189030, 12.2099159417],
    [0.0378787735, 0.5983160526, 17.0539932731],
    [0.0737995847, 0.7455296386, 22.6300735090],
    [0.1375149514, 0.7846508684, 28.3777636470],
    [0.2086988413, 0.7598521261, 33.3756338686],
    [0.2786425302, 0.7077290938, 36.7545037269],
    [0.3460383375, 0.6481594734, 37.9674010237],
    [0.4119748258, 0.5854745841, 36.8105012310],
    [0.4759963798, 0.5227043300, 33.6061572400],
    [0.5361367241, 0.4630400502, 29.0815739403],
    [0.5895053581, 0.4099106750, 24.1107012407],
    [0.6333635113, 0.3662418830, 19.2717448350],
    [0.6663623949, 0.3333780927, 14.8354876890],
    [0.6898830524, 0.3099763198, 10.9624647473],
    [0.7059153976, 0.2940022018, 7.6725127639],
    [0.7167519477, 0.2832154545, 5.0234607615],
    [0.7239819646, 0.2760033157, 3.0925330740],
    [0.7285733868, 0.2714266132, 1.7835139294],
    [0.7312925098, 0.2687074902, 0.9589588536],
    [0.7328600864, 0.2671399136, 0.4847442066],
    [0.7339000520, 0.2660999480, 0.2395826255],
    [0.7345212701, 0.2654787299, 0.1121756334],
    [0.7346828708, 0.2653171292, 0.0534774379],
    [0.7346857686, 0.2653142314, 0.0255191578],
    [0.7346849832, 0.2653150168, 0.0119673861],
    [0.7346953362, 0.2653046638, 0.0055782888],
    [0.7346856136, 0.2653143864, 0.0025969523],
    [0.7346706987, 0.2653293013, 0.0012419104],
    [0.2199393746, 0.0262274448, 0.0006955544],
    [0.1777724030, 0.0067354761, 0.0009023751],
    [0.1737335686, 0.0049548871, 0.0030927585],
    [0.1717666400, 0.0050251271, 0.0490253170],
    [0.1698986171, 0.0062362298, 0.1713663383],
    [0.1673170888, 0.0084063863, 0.4333027879],
    [0.1637690880, 0.0114859831, 0.8735184217],
    [0.1588515408, 0.0159807241, 1.5580812402],
    [0.1521614768, 0.0237540939, 2.5791221841],
    [0.1420787114, 0.0395503337, 4.0744619873],
    [0.1269604988, 0.0710526431, 6.1702370471],
    [0.1050669445, 0.1339285172, 9.1284963341],
    [0.0758767073, 0.2589014181, 13.2678126732],
    [0.0538807086, 0.4588278770, 18.6717949778],
    [0.0678771357, 0.6516018252, 24.9883192583],
    [0.1182836603, 0.7480417374, 31.7785929426],
    [0.1837779413, 0.7586157681, 38.2086730606],
    [0.2521087556, 0.7240999318, 43.2163827631],
    [0.3185088351, 0.6708523394, 45.9017270089],
    [0.3824871028, 0.6127791863, 45.9590206646],
    [0.4444469812, 0.5533873223, 43.4370666536],
    [0.5034340494, 0.4954168980, 38.9223228349],
    [0.5576587176, 0.4416172521, 33.2579245227],
    [0.6046100977, 0.3948696428, 27.2633644759],
    [0.6426645441, 0.3569832054, 21.4620531117],
    [0.6718132188, 0.3279508028, 16.2786303421],
    [0.6929092188, 0.3069619388, 11.8488633463],
    [0.7075197400, 0.2924033554, 8.1761239967],
    [0.7175405469, 0.2824285419, 5.2828413506],
    [0.7243874157, 0.2755984971, 3.2266565825],
    [0.7287724477, 0.2712275523, 1.8453574527],
    [0.7313947332, 0.2686052668, 0.9883554393],
    [0.7329122463, 0.2670877537, 0.4989632145],
    [0.7339210532, 0.2660789468, 0.2462991419],
    [0.7345259808, 0.2654740192, 0.1153209612],
    [0.7346865764, 0.2653134236, 0.0549157435],
    [0.7346813762, 0.2653186238, 0.0261863940],
    [0.7346804134, 0.2653195866, 0.0122948052],
    [0.7346901402, 0.2653098598, 0.0057422801],
    [0.7347531390, 0.2652468610, 0.0026802160],
    [0.2644831880, 0.0469387960, 0.0013627906],
    [0.1828506757, 0.0090956575, 0.0012297942],
    [0.1742879755, 0.0052124581, 0.0032567498],
    [0.1728616862, 0.0048376443, 0.0122527930],
    [0.1699023481, 0.0062351031, 0.1714872185],
    [0.1673307316, 0.0083990407, 0.4338370278],
    [0.1638304420, 0.0114430880, 0.8758727965],
    [0.1591150637, 0.0157660386, 1.5672412747],
    [0.1533620363, 0.0225905901, 2.6159779717],
    [0.1460169615, 0.0347522019, 4.1969238888],
    [0.1351157223, 0.0579448225, 6.4327077366],
    [0.1189060414, 0.1027416481, 9.5710663426],
    [0.0971914064, 0.1871471397, 13.9615355262],
    [0.0756699065, 0.3344215746, 19.7296917094],
    [0.0735255900, 0.5264338181, 26.6061209631],
    [0.1067386706, 0.6762838863, 34.1368386919],
    [0.1642093043, 0.7340791637, 41.6095023562],
    [0.2288976890, 0.7266414832, 48.0494219552],
    [0.2936630915, 0.6874310703, 52.3636060451],
    [0.3560568889, 0.6351849991, 53.8933466498],
    [0.4156961646, 0.5802798061, 52.5855860872],
    [0.4725384554, 0.5255563846, 48.7532322485],
    [0.5257218030, 0.4732559102, 43.0986734173],
    [0.5736583174, 0.4256858205, 36.4105877579],
    [0.6147329236, 0.3847923966, 29.4536727525],
    [0.6486760931, 0.3509968574, 22.9051957648],
    [0.6751281111, 0.3246503485, 17.1650289412],
    [0.6946172685, 0.3052598274, 12.3524745791],
    [0.7083384806, 0.2915871876, 8.4355045857],
    [0.7179563989, 0.2820134995, 5.4169648591],
    [0.7245824637, 0.2754037238, 3.2885001058],
    [0.7288672282, 0.2711327718, 1.8747540384],
    [0.7314418710, 0.2685581290, 1.0025744473],
    [0.7329357190, 0.2670642810, 0.5056797310],
    [0.7339308260, 0.2660691740, 0.2494444697],
    [0.7345296595, 0.2654703405, 0.1167592667],
    [0.7346844974, 0.2653155026, 0.0555829798],
    [0.7346793016, 0.2653206984, 0.0265138132],
    [0.7346782148, 0.2653217852, 0.0124587966],
    [0.7347211458, 0.2652788542, 0.0058255438],
    [0.3385201811, 0.0812917491, 0.0028010962],
    [0.1929179839, 0.0137745462, 0.0018970305],
    [0.1753916113, 0.0057251947, 0.0035841690],
    [0.1729986287, 0.0049011960, 0.0124167844],
    [0.1717849656, 0.0050334984, 0.0491085806],
    [0.1673339274, 0.0083974219, 0.4339579080],
    [0.1638445796, 0.0114338320, 0.8764070363],
    [0.1591849403, 0.0157121427, 1.5695956494],
    [0.1536735967, 0.0223021072, 2.6251380062],
    [0.1474499513, 0.0330788108, 4.2337796764],
    [0.1397691712, 0.0509092571, 6.5551696381],
    [0.1282817291, 0.0838104758, 9.8335370321],
    [0.1121119234, 0.1446208590, 14.4041055347],
    [0.0950373915, 0.2480020300, 20.4234145623],
    [0.0869758660, 0.4018467304, 27.6640176946],
    [0.1037340345, 0.5705377429, 35.7546403966],
    [0.1495222413, 0.6798019883, 43.9677481055],
    [0.2096519905, 0.7102304816, 51.4502512507],
    [0.2718444824, 0.6923248145, 57.1966452372],
    [0.3324754017, 0.6518083729, 60.3552256859],
    [0.3901207168, 0.6023870001, 60.5199120724],
    [0.4444515104, 0.5520077209, 57.9017516820],
    [0.4954894353, 0.5028048798, 52.9295828309],
    [0.5424559300, 0.4566094520, 46.2513366524],
    [0.5844822206, 0.4149103503, 38.6008960345],
    [0.6212923446, 0.3782608091, 30.8968154056],
    [0.6523277838, 0.3473606135, 23.7915943638],
    [0.6769966514, 0.3227893566, 17.6686401740],
    [0.6954903120, 0.3043896547, 12.6118551681],
    [0.7087671704, 0.2911597684, 8.5696280943],
    [0.7181532185, 0.2818170404, 5.4788083824],
    [0.7246753662, 0.2753109482, 3.3178966915],
    [0.7289119213, 0.2710880787, 1.8889730463],
    [0.7314635993, 0.2685364007, 1.0092909638],
    [0.7329466587, 0.2670533413, 0.5088250588],
    [0.7339359653, 0.2660640347, 0.2508827753],
    [0.7345295664, 0.2654704336, 0.1174265030],
    [0.7346834953, 0.2653165047, 0.0559103989],
    [0.7346782817, 0.2653217183, 0.0266778045],
    [0.7346926976, 0.2653073024, 0.0125420602],
    [0.4399354435, 0.1283970116, 0.0059464240],
    [0.2134517467, 0.0233005695, 0.0033353361],
    [0.1776272670, 0.0067638548, 0.0042514053],
    [0.1732718433, 0.0050279884, 0.0127442035],
    [0.1718205912, 0.0050499874, 0.0492725720],
    [0.1699088701, 0.0062380587, 0.1715704822],
    [0.1638478407, 0.0114317771, 0.8765279166],
    [0.1592008250, 0.0157004088, 1.5701298893],
    [0.1537552496, 0.0222294151, 2.6274923810],
    [0.1478191379, 0.0326632983, 4.2429397110],
    [0.1414497972, 0.0484759826, 6.5920254257],
    [0.1336154781, 0.0737054907, 9.9559989337],
    [0.1223265548, 0.1184956742, 14.6665762242],
    [0.1093823275, 0.1943752597, 20.8659845709],
    [0.1014110965, 0.3075758654, 28.3577405476],
    [0.1083415839, 0.4546428441, 36.8125371282],
    [0.1402872518, 0.5930327505, 45.5855498102],
    [0.1933257829, 0.6689576238, 53.8084970000],
    [0.2531171307, 0.6813940998, 60.5974745327],
    [0.3117502588, 0.6582078276, 65.1882648780],
    [0.3675035469, 0.6189597476, 66.9817911085],
    [0.4195897979, 0.5737911141, 65.8360776673],
    [0.4680229441, 0.5287893596, 62.0781022644],
    [0.5128425132, 0.4855891924, 56.0822460660],
    [0.5538630926, 0.4452629246, 48.4416449290],
    [0.5915227493, 0.4078999261, 40.0440386876],
    [0.6252809621, 0.3742892145, 31.7832140046],
    [0.6543858710, 0.3453107861, 24.2952055966],
    [0.6779521553, 0.3218375706, 17.9280207630],
    [0.6959453273, 0.3039360794, 12.7459786767],
    [0.7089682774, 0.2909592348, 8.6314716175],
    [0.7182469167, 0.2817235107, 5.5082049681],
    [0.7247196515, 0.2752667235, 3.3321156994],
    [0.7289327562, 0.2710672438, 1.8956895628],
    [0.7314737566, 0.2685262434, 1.0124362915],
    [0.7329519886, 0.2670480114, 0.5102633643],
    [0.7339375000, 0.2660625000, 0.2515500115],
    [0.7345295212, 0.2654704788, 0.1177539222],
    [0.7346829978, 0.2653170022, 0.0560743903],
    [0.7346850693, 0.2653149307, 0.0267610682],
    [0.5440974530, 0.1767914644, 0.0126629404],
    [0.2533200748, 0.0418108860, 0.0064806638],
    [0.1823943899, 0.0089747085, 0.0056897108],
    [0.1738277958, 0.0052859927, 0.0134114398],
    [0.1718917065, 0.0050829024, 0.0495999912],
    [0.1699215501, 0.0062438810, 0.1717344735],
    [0.1673374143, 0.0083989817, 0.4340411717],
    [0.1592044552, 0.0156977949, 1.5702507695],
    [0.1537736650, 0.0222135091, 2.6280266208],
    [0.1479151944, 0.0325584002, 4.2452940857],
    [0.1418806287, 0.0478714450, 6.6011854603],
    [0.1355338821, 0.0702230331, 9.9928547213],
    [0.1281643074, 0.1045009802, 14.7890381257],
    [0.1194967713, 0.1606445901, 21.1284552604],
    [0.1131914019, 0.2457475155, 28.8003105561],
    [0.1163155574, 0.3595116733, 37.5062599811],
    [0.1371778875, 0.4901043710, 46.6434465418],
    [0.1798967440, 0.5983780209, 55.4262987048],
    [0.2359833812, 0.6495214458, 62.9557202820],
    [0.2935498516, 0.6510264740, 68.5890941736],
    [0.3476336558, 0.6263330913, 71.8148303006],
    [0.3977433813, 0.5902421349, 72.2979567034],
    [0.4437803942, 0.5502287655, 70.0124282497],
    [0.4859274527, 0.5111279188, 65.2307654996],
    [0.5247385409, 0.4737854420, 58.2725543426],
    [0.5613103284, 0.4378536476, 49.8847875821],
    [0.5958124396, 0.4036286529, 40.9304372867],
    [0.6275308105, 0.3720486034, 32.2868252374],
    [0.6554389268, 0.3442618464, 24.5545861856],
    [0.6784486212, 0.3213429868, 18.0621442716],
    [0.6961575993, 0.3037244623, 12.8078221999],
    [0.7090639794, 0.2908638025, 8.6608682033],
    [0.7182918322, 0.2816786761, 5.5224239761],
    [0.7247404118, 0.2752459917, 3.3388322159],
    [0.7289425061, 0.2710574939, 1.8988348906],
    [0.7314785697, 0.2685214303, 1.0138745971],
    [0.7329540395, 0.2670459605, 0.5109306006],
    [0.7339382500, 0.2660617500, 0.2518774307],
    [0.7345294986, 0.2654705014, 0.1179179135],
    [0.7346862253, 0.2653137747, 0.0561576539],
    [0.6256634493, 0.2146811693, 0.0268819484],
    [0.3208951274, 0.0731903694, 0.0131971803],
    [0.1925329667, 0.0136801913, 0.0088350386],
    [0.1750245398, 0.0058404016, 0.0148497454],
    [0.1720365741, 0.0051499529, 0.0502672274],
    [0.1699468649, 0.0062555047, 0.1720618927],
    [0.1673441936, 0.0084020546, 0.4342051630],
    [0.1638502052, 0.0114328158, 0.8766111802],
    [0.1537778507, 0.0222099591, 2.6281475011],
    [0.1479367534, 0.0325353776, 4.2458283256],
    [0.1419921987, 0.0477186663, 6.6035398350],
    [0.1360241405, 0.0693571523, 10.0020147558],
    [0.1302643494, 0.0996738161, 14.8258939134],
    [0.1253678835, 0.1423651935, 21.2509171619],
    [0.1219500663, 0.2055814073, 29.0627812456],
    [0.1241101668, 0.2934428268, 37.9488299897],
    [0.1385143712, 0.3993829248, 47.3371693947],
    [0.1706940582, 0.5091901208, 56.4841954363],
    [0.2198178063, 0.5917794434, 64.5735219868],
    [0.2760469080, 0.6259138282, 70.9473399229],
    [0.3299097368, 0.6217432007, 75.2156595962],
    [0.3785619427, 0.5982342587, 77.1309958955],
    [0.4225687210, 0.5665087232, 76.4743072858],
    [0.4622056545, 0.5322376568, 73.1650914848],
    [0.4982497435, 0.4989660206, 67.4210737762],
    [0.5325280721, 0.4660537991, 59.7156969957],
    [0.5658572108, 0.4333298479, 50.7711861812],
    [0.5982352230, 0.4012159630, 41.4340485194],
    [0.6286829629, 0.3709010898, 32.5462058265],
    [0.6559851225, 0.3437177466, 24.6887096942],
    [0.6786793962, 0.3211130715, 18.1239877948],
    [0.6962585708, 0.3036237998, 12.8372187857],
    [0.7091099974, 0.2908179143, 8.6750872112],
    [0.7183129492, 0.2816575972, 5.5291404925],
    [0.7247501302, 0.2752362866, 3.3419775437],
    [0.7289470567, 0.2710529433, 1.9002731961],
    [0.7314805884, 0.2685194116, 1.0145418334],
    [0.7329550440, 0.2670449560, 0.5112580198],
    [0.7339386250, 0.2660613750, 0.2520414220],
    [0.7345311447, 0.2654688553, 0.1180011772],
    [0.6768452483, 0.2384504132, 0.0562785341],
    [0.4156999859, 0.1172109561, 0.0274161883],
    [0.2129808500, 0.0231718234, 0.0155515551],
    [0.1776220279, 0.0070446111, 0.0179950731],
    [0.1723491382, 0.0052943675, 0.0517055330],
    [0.1699984459, 0.0062791891, 0.1727291289],
    [0.1673577285, 0.0084081896, 0.4345325822],
    [0.1638548025, 0.0114348625, 0.8767751716],
    [0.1592062823, 0.0156985776, 1.5703340332],
    [0.1479416372, 0.0325302333, 4.2459492058],
    [0.1420171614, 0.0476850753, 6.6040740749],
    [0.1361507057, 0.0691381627, 10.0043691306],
    [0.1308004023, 0.0984718518, 14.8350539479],
    [0.1274930064, 0.1360293193, 21.2877729495],
    [0.1271842524, 0.1834209429, 29.1852431471],
    [0.1304572128, 0.2489388327, 38.2113006792],
    [0.1416714464, 0.3329066352, 47.7797394033],
    [0.1660444360, 0.4257958559, 57.1779182893],
    [0.2060720173, 0.5150815788, 65.6314187183],
    [0.2581056195, 0.5780183357, 72.5651416276],
    [0.3122727452, 0.6014872918, 77.5739053455],
    [0.3612639308, 0.5954409767, 80.5318251910],
    [0.4039522205, 0.5748753707, 81.3073464779],
    [0.4415041586, 0.5483315043, 79.6269705210],
    [0.4749183775, 0.5198095766, 75.3553997614],
    [0.5063358660, 0.4909806941, 68.8642164293],
    [0.5372922281, 0.4613245653, 60.6020955948],
    [0.5684285794, 0.4307712167, 51.2747974140],
    [0.5994771087, 0.3999791729, 41.6934291085],
    [0.6292800461, 0.3703063778, 32.6803293350],
    [0.6562384557, 0.3434653734, 24.7505532174],
    [0.6787891300, 0.3210037443, 18.1533843805],
    [0.6963072078, 0.3035753118, 12.8514377936],
    [0.7091316675, 0.2907963054, 8.6818037277],
    [0.7183228360, 0.2816477281, 5.5322858203],
    [0.7247546283, 0.2752317945, 3.3434158492],
    [0.7289490514, 0.2710509486, 1.9009404324],
    [0.7314815779, 0.2685184221, 1.0148692525],
    [0.7329555466, 0.2670444534, 0.5114220111],
    [0.7339395944, 0.2660604056, 0.2521246857],
    [0.7054224471, 0.2519379676, 0.1181220574],
    [0.5182333845, 0.1648159166, 0.0568127740],
    [0.2515586714, 0.0410780110, 0.0297705630],
    [0.1830879875, 0.0095790308, 0.0247115896],
    [0.1730309609, 0.0056096223, 0.0548508608],
    [0.1701097943, 0.0063302274, 0.1741674345],
    [0.1673853087, 0.0084206911, 0.4351998184],
    [0.1638639810, 0.0114389487, 0.8771025907],
    [0.1592098349, 0.0157001201, 1.5704980245],
    [0.1537794098, 0.0222106034, 2.6282307647],
    [0.1420228041, 0.0476775645, 6.6041949551],
    [0.1361789639, 0.0690899605, 10.0049033704],
    [0.1309385364, 0.0981676487, 14.8374083227],
    [0.1280362251, 0.1344481082, 21.2969329840],
    [0.1291047096, 0.1756771859, 29.2220989348],
    [0.1344390314, 0.2238543443, 38.3337625807],
    [0.1449495288, 0.2864823161, 48.0422100928],
    [0.1645686824, 0.3617514440, 57.6204882978],
    [0.1964507955, 0.4398954038, 66.3251415713],
    [0.2410577363, 0.5118285628, 73.6230383591],
    [0.2931881394, 0.5610012178, 79.1917070502],
    [0.3436342436, 0.5786712595, 82.8900709403],
    [0.3870326572, 0.5733170543, 84.7081757734],
    [0.4233383714, 0.5569062535, 84.4600097130],
    [0.4545884605, 0.5357436946, 81.8172787976],
    [0.4832725647, 0.5116347127, 76.7985424145],
    [0.5112878386, 0.4860892174, 69.7506150283],
    [0.5399893946, 0.4586467615, 61.1057068276],
    [0.5697477692, 0.4294584808, 51.5341780030],
    [0.6001204788, 0.3993384145, 41.8275526170],
    [0.6295566289, 0.3700308834, 32.7421728583],
    [0.6563588916, 0.3433453922, 24.7799498031],
    [0.6788420434, 0.3209510270, 18.1676033885],
    [0.6963301321, 0.3035524576, 12.8581543101],
    [0.7091418142, 0.2907861873, 8.6849490555],
    [0.7183273914, 0.2816431809, 5.5337241259],
    [0.7247566469, 0.2752297787, 3.3440830855],
    [0.7289500297, 0.2710499703, 1.9012678516],
    [0.7314820733, 0.2685179267, 1.0150332439],
    [0.7329561886, 0.2670438114, 0.5115052747],
    [0.7199131841, 0.2595186579, 0.2522455659],
    [0.6053772014, 0.2054510831, 0.1186562972],
    [0.3156262677, 0.0708137352, 0.0591671488],
    [0.1943134591, 0.0147836752, 0.0389305975],
    [0.1744811931, 0.0062802649, 0.0615673772],
    [0.1703529658, 0.0064417706, 0.1773127623],
    [0.1674448543, 0.0084476343, 0.4366381240],
    [0.1638826847, 0.0114472754, 0.8777698270],
    [0.1592169277, 0.0157031997, 1.5708254437],
    [0.1537824412, 0.0222118733, 2.6283947561],
    [0.1479430647, 0.0325307924, 4.2460324695],
    [0.1361853421, 0.0690791782, 10.0050242507],
    [0.1309693363, 0.0981006396, 14.8379425625],
    [0.1281761605, 0.1340476104, 21.2992873588],
    [0.1295978564, 0.1737387385, 29.2312589693],
    [0.1359353414, 0.2150002679, 38.3706183683],
    [0.1472394948, 0.2597256437, 48.1646719943],
    [0.1645480042, 0.3155141359, 57.8829589873],
    [0.1907892905, 0.3798541473, 66.7677115798],
    [0.2274945701, 0.4444822324, 74.3167612121],
    [0.2737836823, 0.5032481144, 80.2496037818],
    [0.3238421879, 0.5436921761, 84.5078726451],
    [0.3694955696, 0.5590293110, 87.0664215227],
    [0.4067387739, 0.5561672475, 87.8608390086],
    [0.4367491064, 0.5444238892, 86.6503179897],
    [0.4631940781, 0.5274516456, 83.2604214507],
    [0.4883931345, 0.5066215822, 77.6849410136],
    [0.5140936140, 0.4833170955, 70.2542262611],
    [0.5413740925, 0.4572718994, 61.3650874166],
    [0.5704311270, 0.4287784371, 51.6683015115],
    [0.6004182909, 0.3990418026, 41.8893961403],
    [0.6296881075, 0.3698999206, 32.7715694440],
    [0.6564170048, 0.3432874984, 24.7941688111],
    [0.6788669973, 0.3209261656, 18.1743199050],
    [0.6963408664, 0.3035417562, 12.8612996378],
    [0.7091464773, 0.2907815372, 8.6863873610],
    [0.7183294615, 0.2816411145, 5.5343913621],
    [0.7247576371, 0.2752287899, 3.3444105047],
    [0.7289505195, 0.2710494805, 1.9014318429],
    [0.7314825219, 0.2685174781, 1.0151165075],
    [0.7259402860, 0.2637535756, 0.5116261550],
    [0.6649883734, 0.2339121408, 0.2527798058],
    [0.4068900378, 0.1132668372, 0.1210106720],
    [0.2161319765, 0.0248992141, 0.0683271833],
    [0.1775269632, 0.0076886629, 0.0757863852],
    [0.1708714579, 0.0066796387, 0.1840292787],
    [0.1675749331, 0.0085065359, 0.4397834518],
    [0.1639230678, 0.0114652218, 0.8792081326],
    [0.1592313814, 0.0157094752, 1.5714926800],
    [0.1537884936, 0.0222144087, 2.6287221752],
    [0.1479458406, 0.0325318948, 4.2461964608],
    [0.1420241627, 0.0476780567, 6.6042782188],
    [0.1309762815, 0.0980856463, 14.8380634427],
    [0.1282073475, 0.1339593415, 21.2998215987],
    [0.1297250842, 0.1732473209, 29.2336133440],
    [0.1363230534, 0.2127760667, 38.3797784028],
    [0.1481456045, 0.2501792443, 48.2015277819],
    [0.1649298962, 0.2882923528, 58.0054208888],
    [0.1876001756, 0.3352414661, 67.0301822693],
    [0.2182792719, 0.3889751139, 74.7593312207],
    [0.2571985759, 0.4427520601, 80.9433266347],
    [0.3028025478, 0.4925067483, 85.5657693766],
    [0.3492997396, 0.5280804640, 88.6842232275],
    [0.3893328205, 0.5435857947, 90.2190847579],
    [0.4203900092, 0.5441948358, 90.0511472852],
    [0.4455750463, 0.5361855941, 88.0934606428],
    [0.4684715107, 0.5223620627, 84.1468200497],
    [0.4912960334, 0.5037785890, 78.1885522464],
    [0.5155348202, 0.4818930151, 70.5136068502],
    [0.5420913888, 0.4565596604, 61.4992109251],
    [0.5707473226, 0.4284637659, 51.7301450348],
    [0.6005598607, 0.3989008020, 41.9187927260],
    [0.6297515777, 0.3698366995, 32.7857884519],
    [0.6564444206, 0.3432601862, 24.8008853276],
    [0.6788786820, 0.3209145242, 18.1774652327],
    [0.6963457921, 0.3035368455, 12.8627379434],
    [0.7091486113, 0.2907794092, 8.6870545973],
    [0.7183304771, 0.2816401007, 5.5347187813],
    [0.7247581330, 0.2752282947, 3.3445744960],
    [0.7289508754, 0.2710491246, 1.9015151066],
    [0.7279150611, 0.2668305964, 1.0152373877],
    [0.6966452347, 0.2500203107, 0.5121603948],
    [0.5114294504, 0.1623518700, 0.2551341805],
    [0.2566659732, 0.0437256672, 0.1301707065],
    [0.1837202903, 0.0105523810, 0.1051829709],
    [0.1719660418, 0.0071817705, 0.1982482867],
    [0.1678524632, 0.0086322238, 0.4464999682],
    [0.1640112953, 0.0115044595, 0.8823534603],
    [0.1592625888, 0.0157230008, 1.5729309855],
    [0.1538008271, 0.0222195754, 2.6293894115],
    [0.1479513829, 0.0325340959, 4.2465238800],
    [0.1420268048, 0.0476790280, 6.6044422101],
    [0.1361866543, 0.0690796022, 10.0051075143],
    [0.1282143772, 0.1339395876, 21.2999424789],
    [0.1297534556, 0.1731389663, 29.2341475839],
    [0.1364234995, 0.2122116637, 38.3821327776],
    [0.1483852497, 0.2477722919, 48.2106878165],
    [0.1651543912, 0.2784777017, 58.0422766765],
    [0.1860738098, 0.3084734241, 67.1526441708],
    [0.2122608975, 0.3467297461, 75.0218019102],
    [0.2451029778, 0.3916251580, 81.3858966433],
    [0.2839796683, 0.4376642543, 86.2594922296],
    [0.3271709081, 0.4818656885, 89.7421199590],
    [0.3689385913, 0.5154698481, 91.8368864626],
    [0.4031074964, 0.5327091380, 92.4093930345],
    [0.4293817539, 0.5362684279, 91.4942899383],
    [0.4509897481, 0.5311230842, 88.9798592418],
    [0.4714643548, 0.5194741285, 84.6504312825],
    [0.4927876588, 0.5023174867, 78.4479328354],
    [0.5162814083, 0.4811552407, 70.6477303587],
    [0.5424232104, 0.4562301666, 61.5610544484],
    [0.5708976353, 0.4283141765, 51.7595416205],
    [0.6006282235, 0.3988327141, 41.9330117340],
    [0.6297815278, 0.3698068669, 32.7925049684],
    [0.6564572582, 0.3432473970, 24.8040306553],
    [0.6788840387, 0.3209091873, 18.1789035383],
    [0.6963480556, 0.3035345890, 12.8634051797],
    [0.7091496584, 0.2907783652, 8.6873820164],
    [0.7183309858, 0.2816395930, 5.5348827726],
    [0.7247584476, 0.2752279804, 3.3446577597],
    [0.7270315115, 0.2701286502, 1.9016359868],
    [0.7125260225, 0.2595566035, 1.0157716276],
    [0.5954937609, 0.2026204837, 0.5145147696],
    [0.3255901196, 0.0759442759, 0.2642942151],
    [0.1962898014, 0.0163742856, 0.1670264942],
    [0.1742156894, 0.0082137268, 0.2276448724],
    [0.1684391384, 0.0088979022, 0.4607189762],
    [0.1641995777, 0.0115882074, 0.8890699768],
    [0.1593307734, 0.0157525746, 1.5760763133],
    [0.1538274572, 0.0222307108, 2.6308277171],
    [0.1479626769, 0.0325385813, 4.2471911162],
    [0.1420320799, 0.0476809672, 6.6047696293],
    [0.1361892061, 0.0690804398, 10.0052715057],
    [0.1309775487, 0.0980859916, 14.8381467064],
    [0.1297598525, 0.1731147141, 29.2342684641],
    [0.1364459468, 0.2120871701, 38.3826670175],
    [0.1484480329, 0.2471609180, 48.2130421912],
    [0.1652217410, 0.2759943015, 58.0514367110],
    [0.1856027769, 0.2987301969, 67.1894999585],
    [0.2089721791, 0.3209686456, 75.1442638117],
    [0.2366947199, 0.3519480764, 81.6483673328],
    [0.2696470081, 0.3903955574, 86.7020622381],
    [0.3067555387, 0.4314806489, 90.4358428120],
    [0.3461319182, 0.4728349964, 92.8947831942],
    [0.3826326570, 0.5064432189, 94.0271947393],
    [0.4121938210, 0.5254678663, 93.8525356876],
    [0.4349010506, 0.5313883089, 92.3806885374],
    [0.4540612388, 0.5282485267, 89.4834704746],
    [0.4730025478, 0.5179894358, 84.9098118716],
    [0.4935603765, 0.5015604875, 78.5820563439],
    [0.5166267285, 0.4808139789, 70.7095738820],
    [0.5425809564, 0.4560735254, 61.5904510341],
    [0.5709702356, 0.4282419255, 51.7737606285],
    [0.6006604875, 0.3988005799, 41.9397282504],
    [0.6297955523, 0.3697928974, 32.7956502962],
    [0.6564631399, 0.3432415375, 24.8054689609],
    [0.6788865067, 0.3209067285, 18.1795707746],
    [0.6963491663, 0.3035334817, 12.8637325988],
    [0.7091501828, 0.2907778423, 8.6875460078],
    [0.7183312838, 0.2816392954, 5.5349660363],
    [0.7236571835, 0.2746874658, 3.3447786399],
    [0.7186200424, 0.2660962762, 1.9021702267],
    [0.6524374685, 0.2311655427, 1.0181260024],
    [0.4140185384, 0.1177347374, 0.5236748041],
    [0.2215372401, 0.0281352436, 0.3011500027],
    [0.1788825249, 0.0103581038, 0.2894883957],
    [0.1696482567, 0.0094454286, 0.4901155619],
    [0.1645977886, 0.0117653207, 0.9032889847],
    [0.1594762997, 0.0158157034, 1.5827928298],
    [0.1538856424, 0.0222550596, 2.6339730448],
    [0.1479870624, 0.0325482480, 4.2486294218],
    [0.1420428295, 0.0476849189, 6.6054368655],
    [0.1361943008, 0.0690821122, 10.0055989248],
    [0.1309800131, 0.0980866751, 14.8383106977],
    [0.1282155881, 0.1339398447, 21.3000257425],
    [0.1364510146, 0.2120593026, 38.3827878977],
    [0.1484621510, 0.2470260201, 48.2135764311],
    [0.1652406340, 0.2753629231, 58.0537910857],
    [0.1854931681, 0.2962569232, 67.1986599930],
    [0.2078478316, 0.3115144701, 75.1811195993],
    [0.2318753193, 0.3274273983, 81.7708292343],
    [0.2593167076, 0.3531386354, 86.9645329276],
    [0.2907598941, 0.3873902600, 90.8784128205],
    [0.3246515687, 0.4257530399, 93.5885060471],
    [0.3594358686, 0.4661861487, 95.0850914708],
    [0.3916896537, 0.5003717982, 95.4703373924],
    [0.4177762316, 0.5209944415, 94.7389342867],
    [0.4380328968, 0.5286142669, 92.8842997701],
    [0.4556401284, 0.5267701326, 89.7428510636],
    [0.4737993848, 0.5172201622, 85.0439353801],
    [0.4939177441, 0.5012103600, 78.6438998672],
    [0.5167908962, 0.4806517380, 70.7389704677],
    [0.5426571585, 0.4559978570, 61.6046700421],
    [0.5710045034, 0.4282078227, 51.7804771449],
    [0.6006755957, 0.3987855324, 41.9428735782],
    [0.6298019753, 0.3697864995, 32.7970886017],
    [0.6564658542, 0.3432388335, 24.8061361972],
    [0.6788877176, 0.3209055220, 18.1798981937],
    [0.6963497225, 0.3035329272, 12.8638965902],
    [0.7091504760, 0.2907775498, 8.6876292714],
    [0.7176577466, 0.2812968758, 5.5350869165],
    [0.7187926897, 0.2723008342, 3.3453128798],
    [0.6835852092, 0.2493075942, 1.9045246014],
    [0.5073589235, 0.1627272023, 1.0272860369],
    [0.2638649320, 0.0480257021, 0.5605305918],
    [0.1886887392, 0.0148891057, 0.4236119042],
    [0.1721710337, 0.0105897490, 0.5519590852],
    [0.1654193360, 0.0121307041, 0.9326855705],
    [0.1597841567, 0.0159492428, 1.5970118377],
    [0.1540098340, 0.0223070379, 2.6406895613],
    [0.1480403442, 0.0325693859, 4.2517747496],
    [0.1420660394, 0.0476934346, 6.6068751711],
    [0.1362046829, 0.0690855202, 10.0062661611],
    [0.1309849333, 0.0980880398, 14.8386381169],
    [0.1282179432, 0.1339403557, 21.3001897339],
    [0.1297609899, 0.1731148829, 29.2343517278],
    [0.1484653510, 0.2469958210, 48.2136973113],
    [0.1652450447, 0.2752235721, 58.0543253256],
    [0.1854669199, 0.2956275947, 67.2010143678],
    [0.2075710810, 0.3091078770, 75.1902796338],
    [0.2301754774, 0.3183663582, 81.8076850219],
    [0.2532371199, 0.3298634739, 87.0869948292],
    [0.2789563802, 0.3522143637, 91.1408835100],
    [0.3074966789, 0.3840888770, 94.0310760557],
    [0.3372973787, 0.4213407734, 95.7788143238],
    [0.3682700055, 0.4616351261, 96.5282341239],
    [0.3972631653, 0.4965978438, 96.3567359914],
    [0.4209456365, 0.5184466413, 95.2425455194],
    [0.4396431409, 0.5271867215, 93.1436803592],
    [0.4564580450, 0.5260040092, 89.8769745722],
    [0.4741678756, 0.5168643702, 85.1057789034],
    [0.4940876423, 0.5010438996, 78.6732964529],
    [0.5168702089, 0.4805733562, 70.7531894757],
    [0.5426931292, 0.4559621383, 61.6113865585],
    [0.5710205501, 0.4281918532, 51.7836224727],
    [0.6006825134, 0.3987786425, 41.9443118838],
    [0.6298049425, 0.3697835441, 32.7977558380],
    [0.6564671860, 0.3432375067, 24.8064636163],
    [0.6788883241, 0.3209049178, 18.1800621851],
    [0.6963500248, 0.3035326258, 12.8639798538],
    [0.7087147255, 0.2905447747, 8.6877501517],
    [0.7146702387, 0.2797786606, 5.5356211564],
    [0.6978377002, 0.2620240247, 3.3476672545],
    [0.5814346846, 0.2004304374, 1.9136846359],
    [0.3280832376, 0.0786128689, 1.0641418245],
    [0.2065621761, 0.0232160767, 0.6829924933],
    [0.1775368075, 0.0130371646, 0.6860825937],
    [0.1671371559, 0.0128960008, 0.9945290937],
    [0.1604196121, 0.0162248708, 1.6264084234],
    [0.1542725902, 0.0224170036, 2.6549085692],
    [0.1481540734, 0.0326145115, 4.2584912660],
    [0.1421167532, 0.0477120567, 6.6100204989],
    [0.1362270994, 0.0690928632, 10.0077044667],
    [0.1309949598, 0.0980908208, 14.8393053532],
    [0.1282226450, 0.1339413758, 21.3005171530],
    [0.1297632020, 0.1731152207, 29.2345157191],
    [0.1364520641, 0.2120593920, 38.3828711613],
    [0.1652460683, 0.2751923739, 58.0544462058],
    [0.1854613447, 0.2954886631, 67.2015486076],
    [0.2075021424, 0.3084950755, 75.1926340086],
    [0.2297508064, 0.3160544602, 81.8168450564],
    [0.2510578078, 0.3212143360, 87.1238506168],
    [0.2718911689, 0.3300510053, 91.2633454116],
    [0.2946377001, 0.3505467432, 94.2935467452],
    [0.3193996054, 0.3813522470, 96.2213843323],
    [0.3457331590, 0.4182380165, 97.2219569769],
    [0.3737199167, 0.4587766158, 97.4146327229],
    [0.4004306211, 0.4944408618, 96.8603472242],
    [0.4225757201, 0.5171341800, 95.5019261085],
    [0.4404773245, 0.5264467260, 93.2778038677],
    [0.4568362594, 0.5256496607, 89.9388180954],
    [0.4743430636, 0.5166952127, 85.1351754891],
    [0.4941697296, 0.5009634735, 78.6875154609],
    [0.5169076498, 0.4805363547, 70.7599059921],
    [0.5427099734, 0.4559454121, 61.6145318863],
    [0.5710278964, 0.4281845423, 51.7850607783],
    [0.6006857111, 0.3987754576, 41.9449791200],
    [0.6298063984, 0.3697820939, 32.7980832572],
    [0.6564678530, 0.3432368422, 24.8066276077],
    [0.6788886478, 0.3209045953, 18.1801454487],
    [0.6960501112, 0.3033611620, 12.8641007341],
    [0.7067774558, 0.2895103258, 8.6882843915],
    [0.7015663588, 0.2731222630, 5.5379755311],
    [0.6295682810, 0.2285919263, 3.3568272890],
    [0.4048335621, 0.1163014166, 1.9505404236],
    [0.2377654023, 0.0379301021, 1.1866037260],
    [0.1875495169, 0.0176415581, 0.9454631828],
    [0.1708075857, 0.0145403124, 1.1286526023],
    [0.1617497104, 0.0168027864, 1.6882519467],
    [0.1548150893, 0.0226440322, 2.6843051550],
    [0.1483947088, 0.0327099851, 4.2727102740],
    [0.1422250028, 0.0477518124, 6.6167370153],
    [0.1362760797, 0.0691089219, 10.0108497944],
    [0.1310166085, 0.0980968112, 14.8407436587],
    [0.1282322266, 0.1339434547, 21.3011843893],
    [0.1297676184, 0.1731158953, 29.2348431383],
    [0.1364541051, 0.2120595743, 38.3830351527],
    [0.1484663047, 0.2469958472, 48.2137805749],
    [0.1854601296, 0.2954575570, 67.2016694878],
    [0.2074871213, 0.3083597660, 75.1931682485],
    [0.2296440456, 0.3154654190, 81.8191994312],
    [0.2505094077, 0.3190033365, 87.1330106513],
    [0.2693329871, 0.3217782417, 91.3002011992],
    [0.2868538342, 0.3292769082, 94.4160086467],
    [0.3058487597, 0.3489592796, 96.4838550218],
    [0.3273734335, 0.3793486347, 97.6645269854],
    [0.3509523480, 0.4162584051, 98.1083555759],
    [0.3768217236, 0.4571332362, 97.9182439557],
    [0.4020606132, 0.4933276910, 97.1197278132],
    [0.4234202609, 0.5164534445, 95.6360496170],
    [0.4408630465, 0.5261044118, 93.3396473910],
    [0.4570160715, 0.5254811829, 89.9682146812],
    [0.4744277110, 0.5166134791, 85.1493944970],
    [0.4942084818, 0.5009255054, 78.6942319773],
    [0.5169251827, 0.4805190276, 70.7630513199],
    [0.5427176840, 0.4559377554, 61.6159701919],
    [0.5710312937, 0.4281811613, 51.7857280146],
    [0.6006872802, 0.3987738949, 41.9453065392],
    [0.6298071276, 0.3697813675, 32.7982472485],
    [0.6564682049, 0.3432364916, 24.8067108713],
    [0.6786717584, 0.3207688436, 18.1802663289],
    [0.6947149832, 0.3025981867, 12.8646349739],
    [0.6981932611, 0.2849286780, 8.6906387663],
    [0.6560566831, 0.2500380925, 5.5471355657],
    [0.4785049905, 0.1549036178, 3.3936830767],
    [0.2835196170, 0.0600541267, 2.0730023251],
    [0.2057907068, 0.0261292388, 1.4490744155],
    [0.1777184198, 0.0176616750, 1.3880331913],
    [0.1645980416, 0.0180473161, 1.8223754552],
    [0.1559512231, 0.0231203150, 2.7461486782],
    [0.1488916007, 0.0329071194, 4.3021068597],
    [0.1424540520, 0.0478359273, 6.6309560233],
    [0.1363806305, 0.0691432059, 10.0175663109],
    [0.1310639115, 0.0981099134, 14.8438889865],
    [0.1282529145, 0.1339479304, 21.3026226949],
    [0.1297766184, 0.1731172700, 29.2355103746],
    [0.1364581801, 0.2120599383, 38.3833625718],
    [0.1484681592, 0.2469959057, 48.2139445663],
    [0.1652469256, 0.2751923558, 58.0545294695],
    [0.2074837886, 0.3083294695, 75.1932891287],
    [0.2296206539, 0.3153353354, 81.8197336711],
    [0.2503709795, 0.3184397285, 87.1353650261],
    [0.2686864816, 0.3196602572, 91.3093612337],
    [0.2840169512, 0.3213109102, 94.4528644343],
    [0.2975870959, 0.3283273807, 96.6063169233],
    [0.3133853089, 0.3477185043, 97.9269976749],
    [0.3323199890, 0.3780414340, 98.5509255845],
    [0.3539279449, 0.4151103979, 98.6119668087],
    [0.3784192622, 0.4562825574, 98.1776245448],
    [0.4029052836, 0.4927496895, 97.2538513218],
    [0.4238107709, 0.5161384399, 95.6978931403],
    [0.4410464303, 0.5259416445, 93.3690439767],
    [0.4571029566, 0.5253997746, 89.9824336891],
    [0.4744676730, 0.5165748929, 85.1561110135],
    [0.4942266288, 0.5009077256, 78.6973773051],
    [0.5169332080, 0.4805110965, 70.7644896254],
    [0.5427212508, 0.4559342136, 61.6166374282],
    [0.5710329607, 0.4281795023, 51.7860554337],
    [0.6006880661, 0.3987731121, 41.9454705305],
    [0.6298075094, 0.3697809872, 32.7983305122],
    [0.6563057275, 0.3431225474, 24.8068317515],
    [0.6777054484, 0.3201643083, 18.1808005688],
    [0.6887643192, 0.2991992784, 12.8669893487],
    [0.6672395363, 0.2684317755, 8.6997988008],
    [0.5370141310, 0.1898754135, 5.5839913533],
    [0.3399350499, 0.0886665403, 3.5161449782],
    [0.2344623381, 0.0397914021, 2.3354730146],
    [0.1905200191, 0.0235117925, 1.8916444241],
    [0.1699845785, 0.0204202923, 2.0817560443],
    [0.1583869725, 0.0241472403, 2.8802721868],
    [0.1499325074, 0.0333208212, 4.3639503830],
    [0.1429270537, 0.0480096205, 6.6603526090],
    [0.1366018588, 0.0692157454, 10.0317853188],
    [0.1311648831, 0.0981378865, 14.8506055030],
    [0.1282981186, 0.1339577218, 21.3057680227],
    [0.1297960506, 0.1731202266, 29.2369486801],
    [0.1364664841, 0.2120606802, 38.3840298081],
    [0.1484718618, 0.2469960225, 48.2142719854],
    [0.1652485924, 0.2751923274, 58.0546934608],
    [0.1854608966, 0.2954575121, 67.2017527515],
    [0.2296154446, 0.3153062079, 81.8198545513],
    [0.2503405779, 0.3183152461, 87.1358992659],
    [0.2685229221, 0.3191201511, 91.3117156085],
    [0.2832980629, 0.3192691329, 94.4620244689],
    [0.2945636065, 0.3205823290, 96.6431727110],
    [0.3048186256, 0.3275141807, 98.0494595764],
    [0.3180709406, 0.3468814324, 98.8133962740],
    [0.3351446378, 0.3772741957, 99.0545368172],
    [0.3554619505, 0.4145135225, 98.8713473977],
    [0.3792474046, 0.4558400243, 98.3117480533],
    [0.4032958738, 0.4924820495, 97.3156948450],
    [0.4239964364, 0.5159886387, 95.7272897260],
    [0.4411350445, 0.5258629929, 93.3832629847],
    [0.4571439758, 0.5253613412, 89.9891502056],
    [0.4744863865, 0.5165568235, 85.1592563413],
    [0.4942349348, 0.5008995876, 78.6988156107],
    [0.5169369211, 0.4805074270, 70.7651568617],
    [0.5427230010, 0.4559324757, 61.6169648473],
    [0.5710337956, 0.4281786714, 51.7862194251],
    [0.6006884757, 0.3987727042, 41.9455537942],
    [0.6296824272, 0.3696808498, 32.7984513924],
    [0.6555814526, 0.3426148739, 24.8073659914],
    [0.6733833039, 0.3174617921, 18.1831549436],
    [0.6668286368, 0.2866885899, 12.8761493832],
    [0.5768692998, 0.2204373868, 8.7366545884],
    [0.3984640158, 0.1210117631, 5.7064532548],
    [0.2734598445, 0.0591982688, 3.7786156677],
    [0.2112180663, 0.0331944143, 2.7780430231],
    [0.1800450098, 0.0249046870, 2.5853672771],
    [0.1630036566, 0.0261099489, 3.1396527758],
    [0.1521654235, 0.0342134842, 4.4980738915],
    [0.1439180693, 0.0483742167, 6.7221961323],
    [0.1370587332, 0.0693655429, 10.0611819046],
    [0.1313785426, 0.0981970739, 14.8648245109],
    [0.1283946111, 0.1339786276, 21.3124845391],
    [0.1298385112, 0.1731266976, 29.2400940079],
    [0.1364844139, 0.2120622717, 38.3854681137],
    [0.1484794071, 0.2469962606, 48.2149392217],
    [0.1652519203, 0.2751922707, 58.0550208800],
    [0.1854623877, 0.2954574307, 67.2019167428],
    [0.2074844753, 0.3083294109, 75.1933723923],
    [0.2503337971, 0.3182873720, 87.1360201462],
    [0.2684869563, 0.3190008480, 91.3122498483],
    [0.2831159469, 0.3187483084, 94.4643788436],
    [0.2937961386, 0.3185956154, 96.6523327455],
    [0.3016754164, 0.3199180535, 98.0863153641],
    [0.3093210330, 0.3269421885, 98.9358581755],
    [0.3207501256, 0.3463815598, 99.3170075067],
    [0.3366021142, 0.3768728971, 99.3139174063],
    [0.3562574972, 0.4142021478, 99.0054709063],
    [0.3796303981, 0.4556348760, 98.3735915766],
    [0.4034815876, 0.4923547424, 97.3450914308],
    [0.4240861569, 0.5159162497, 95.7415087340],
    [0.4411768808, 0.5258258603, 93.3899795011],
    [0.4571631845, 0.5253433433, 89.9922955333],
    [0.4744949515, 0.5165485532, 85.1606946468],
    [0.4942387783, 0.5008958219, 78.6994828470],
    [0.5169387431, 0.4805056264, 70.7654842809],
    [0.5427238776, 0.4559316052, 61.6171288387],
    [0.5710342294, 0.4281782397, 51.7863026887],
    [0.6005897380, 0.3986815510, 41.9456746744],
    [0.6291246379, 0.3692345447, 32.7989856322],
    [0.6523344108, 0.3403402820, 24.8097203662],
    [0.6572331958, 0.3073789947, 18.1923149781],
    [0.5981882148, 0.2476748971, 12.9130051708],
    [0.4506802157, 0.1543918000, 8.8591164900],
    [0.3191430342, 0.0836801874, 5.9689239443],
    [0.2405853580, 0.0475214239, 4.2211856762],
    [0.1965436821, 0.0324326455, 3.4717658761],
    [0.1716628733, 0.0298353355, 3.6432640086],
    [0.1564025976, 0.0359219611, 4.7574544806],
    [0.1460446830, 0.0491614037, 6.8563196408],
    [0.1380160675, 0.0696800608, 10.1230254278],
    [0.1318198076, 0.0983193037, 14.8942210966],
    [0.1285987979, 0.1340228619, 21.3267035471],
    [0.1299291486, 0.1731405151, 29.2468105243],
    [0.1365235917, 0.2120657588, 38.3886134415],
    [0.1484956988, 0.2469967657, 48.2163775273],
    [0.1652587021, 0.2751921550, 58.0556881162],
    [0.1854653647, 0.2954572682, 67.2022441620],
    [0.2074858102, 0.3083293024, 75.1935363837],
    [0.2296160631, 0.3153061443, 81.8199378149],
    [0.2684789279, 0.3189741330, 91.3123707286],
    [0.2830758716, 0.3186332562, 94.4649130835],
    [0.2936015602, 0.3180887346, 96.6546871202],
    [0.3008767294, 0.3179685301, 98.0954753986],
    [0.3061056713, 0.3194387074, 98.9727139631],
    [0.3118976477, 0.3265935877, 99.4394694082],
    [0.3221335589, 0.3461179046, 99.5763880958],
    [0.3373582795, 0.3766627302, 99.4480409148],
    [0.3566254775, 0.4140575450, 99.0673144295],
    [0.3798125159, 0.4555372549, 98.4029881623],
    [0.4035713364, 0.4922932202, 97.3593104387],
    [0.4241285163, 0.5158820732, 95.7482252504],
    [0.4411964722, 0.5258084714, 93.3931248289],
    [0.4571719759, 0.5253351058, 89.9937338389],
    [0.4744989152, 0.5165447260, 85.1613618831],
    [0.4942406643, 0.5008939741, 78.6998102661],
    [0.5169396556, 0.4805047245, 70.7656482722],
    [0.5427243321, 0.4559311539, 61.6172121023],
    [0.5709543242, 0.4280930416, 51.7864235689],
    [0.6001493050, 0.3982751965, 41.9462089143],
    [0.6266200255, 0.3672319121, 32.8013400070],
    [0.6400936606, 0.3317791438, 24.8188804007],
    [0.6043880216, 0.2744991587, 18.2291707657],
    [0.4891627148, 0.1865290247, 13.0354670724],
    [0.3658261076, 0.1118461766, 9.1215871795],
    [0.2769733699, 0.0665594258, 6.4114939529],
    [0.2204689255, 0.0438117850, 4.9149085292],
    [0.1859689053, 0.0361368903, 4.5296626076],
    [0.1643674512, 0.0391729257, 5.2610657133],
    [0.1500828216, 0.0506696036, 7.1157002299],
    [0.1400709106, 0.0703596108, 10.2571489364],
    [0.1327445309, 0.0985760330, 14.9560646199],
    [0.1290205213, 0.1341142149, 21.3561001328],
    [0.1301209512, 0.1731697513, 29.2610295323],
    [0.1366072228, 0.2120732063, 38.3953299579],
    [0.1485312975, 0.2469978776, 48.2195228551],
    [0.1652733454, 0.2751918975, 58.0571264218],
    [0.1854714314, 0.2954569370, 67.2029113983],
    [0.2074884754, 0.3083290857, 75.1938638028],
    [0.2296172649, 0.3153060258, 81.8201018063],
    [0.2503343594, 0.3182873083, 87.1361034098],
    [0.2830669218, 0.3186074927, 94.4650339637],
    [0.2935587245, 0.3179767571, 96.6552213601],
    [0.3006741386, 0.3174710721, 98.0978297733],
    [0.3052881483, 0.3175123489, 98.9818739976],
    [0.3086418121, 0.3191430816, 99.4763251959],
    [0.3132287474, 0.3264079514, 99.6988499973],
    [0.3228515556, 0.3459790569, 99.7105116043],
    [0.3377081031, 0.3765648818, 99.5098844381],
    [0.3568004746, 0.4139886941, 99.0967110153],
    [0.3799005333, 0.4554900757, 98.4172071702],
    [0.4036137105, 0.4922641735, 97.3660269552],
    [0.4241483527, 0.5158660684, 95.7513705782],
    [0.4412054385, 0.5258005126, 93.3945631345],
    [0.4571760447, 0.5253312936, 89.9944010752],
    [0.4745008603, 0.5165428480, 85.1616893023],
    [0.4942416089, 0.5008930487, 78.6999742575],
    [0.5169401281, 0.4805042576, 70.7657315359],
    [0.5426579217, 0.4558499061, 61.6173329825],
    [0.5705978183, 0.4277131750, 51.7869578088],
    [0.5981694318, 0.3964499510, 41.9485632890],
    [0.6171209143, 0.3596494054, 32.8105000415],
    [0.5988207035, 0.3030116574, 24.8557361883],
    [0.5125445100, 0.2180660211, 18.3516326672],
    [0.4056982693, 0.1413795920, 13.2979377619],
    [0.3167510916, 0.0897605325, 9.5641571880],
    [0.2510167133, 0.0593671172, 7.1052168058],
    [0.2069546682, 0.0457741454, 5.9728052607],
    [0.1775770059, 0.0446962968, 6.1474643124],
    [0.1576830175, 0.0535446324, 7.6193114626],
    [0.1439746399, 0.0716630937, 10.5165295254],
    [0.1347298318, 0.0991313181, 15.0901881284],
    [0.1299043926, 0.1343062053, 21.4179436561],
    [0.1305171202, 0.1732301321, 29.2904261180],
    [0.1367842044, 0.2120889637, 38.4095489659],
    [0.1486072894, 0.2470002546, 48.2262393715],
    [0.1653053423, 0.2751913420, 58.0602717496],
    [0.1854845312, 0.2954562149, 67.2043497038],
    [0.2074939066, 0.3083286442, 75.1945310391],
    [0.2296196645, 0.3153057890, 81.8204292254],
    [0.2503354518, 0.3182871892, 87.1362674012],
    [0.2684794456, 0.3189740713, 91.3124539922],
    [0.2935491558, 0.3179516818, 96.6553422403],
    [0.3006295280, 0.3173611726, 98.0983640132],
    [0.3050807218, 0.3170207620, 98.9842283724],
    [0.3078137159, 0.3172299784, 99.4854852304],
    [0.3099522373, 0.3189847961, 99.7357057849],
    [0.3139197379, 0.3263095706, 99.8329735058],
    [0.3231837703, 0.3459141788, 99.7723551276],
    [0.3378744819, 0.3765182547, 99.5392810238],
    [0.3568850570, 0.4139554172, 99.1109300232],
    [0.3799420914, 0.4554678003, 98.4239236867],
    [0.4036335539, 0.4922505707, 97.3691722829],
    [0.4241574310, 0.5158587429, 95.7528088838],
    [0.4412095885, 0.5257968294, 93.3952303707],
    [0.4571780413, 0.5253294230, 89.9947284943],
    [0.4745018344, 0.5165419074, 85.1618532936],
    [0.4942420975, 0.5008925699, 78.7000575211],
    [0.5168834486, 0.4804256368, 70.7658524161],
    [0.5423615722, 0.4554876134, 61.6178672224],
    [0.5689939077, 0.4260056822, 51.7893121835],
    [0.5906285758, 0.3895104995, 41.9577233235],
    [0.5844185657, 0.3336359959, 32.8473558292],
    [0.5223456883, 0.2503416169, 24.9781980898],
    [0.4348583784, 0.1718272695, 18.6141033567],
    [0.3534056414, 0.1154125608, 13.7405077704],
    [0.2856859698, 0.0789631023, 10.2578800410],
    [0.2341852655, 0.0591595923, 8.1631135374],
    [0.1970717366, 0.0532018993, 7.5906069655],
    [0.1703155031, 0.0584451264, 8.5057100617],
    [0.1513284730, 0.0741524767, 11.0201407582],
    [0.1385031339, 0.1001982138, 15.3495687175],
    [0.1318024485, 0.1347222179, 21.5520671646],
    [0.1313475364, 0.1733571681, 29.3522696413],
    [0.1371497848, 0.2121215067, 38.4389455516],
    [0.1487681100, 0.2470052821, 48.2404583795],
    [0.1653736465, 0.2751901592, 58.0669882660],
    [0.1855131552, 0.2954546436, 67.2074950316],
    [0.2075056345, 0.3083276845, 75.1959693447],
    [0.2296245544, 0.3153053065, 81.8210964617],
    [0.2503376330, 0.3182869513, 87.1365948203],
    [0.2684804512, 0.3189739559, 91.3126179836],
    [0.2830674060, 0.3186074335, 94.4651172274],
    [0.3006195612, 0.3173365625, 98.0984848934],
    [0.3050350398, 0.3169121575, 98.9847626123],
    [0.3076035744, 0.3167417516, 99.4878396052],
    [0.3091187380, 0.3170785390, 99.7448658195],
    [0.3106325533, 0.3189006102, 99.8698292935],
    [0.3142394882, 0.3262634110, 99.8948170291],
    [0.3233417873, 0.3458832279, 99.8017517133],
    [0.3379549041, 0.3764957179, 99.5535000318],
    [0.3569249947, 0.4139397053, 99.1176465397],
    [0.3799615529, 0.4554573681, 98.4270690145],
    [0.4036426352, 0.4922443442, 97.3706105885],
    [0.4241616332, 0.5158553530, 95.7534761200],
    [0.4412116250, 0.5257950220, 93.3955577899],
    [0.4571790413, 0.5253284861, 89.9948924857],
    [0.4745023379, 0.5165414211, 85.1619365573],
    [0.4941924867, 0.5008157155, 78.7001784013],
    [0.5166304856, 0.4800750318, 70.7663866560],
    [0.5410274934, 0.4538582992, 61.6202215972],
    [0.5628664323, 0.4194950396, 51.7984722181],
    [0.5642827005, 0.3653524290, 41.9945791112],
    [0.5209521745, 0.2837330097, 32.9698177307],
    [0.4525379804, 0.2036351392, 25.2406687793],
    [0.3826962282, 0.1429313132, 19.0566733653],
    [0.3190566975, 0.1013562192, 14.4342306234],
    [0.2657344743, 0.0763500433, 11.3157767725],
    [0.2225853533, 0.0651297488, 9.7809152421],
    [0.1890233974, 0.0660306628, 9.9488527148],
    [0.1635708770, 0.0784101104, 11.9065393572],
    [0.1456172341, 0.1022409476, 15.8531799503],
    [0.1354116573, 0.1355237155, 21.8114477536],
    [0.1331312722, 0.1736333660, 29.4863931498],
    [0.1379161836, 0.2121901447, 38.5007890749],
    [0.1491003294, 0.2470156625, 48.2698549652],
    [0.1655182020, 0.2751876535, 58.0812072740],
    [0.1855742598, 0.2954512918, 67.2142115481],
    [0.2075312605, 0.3083255933, 75.1991146724],
    [0.2296351138, 0.3153042587, 81.8225347673],
    [0.2503420778, 0.3182864666, 87.1372620566],
    [0.2684824589, 0.3189737255, 91.3129454027],
    [0.2830683465, 0.3186073228, 94.4652812187],
    [0.2935496171, 0.3179516248, 96.6554255040],
    [0.3050248328, 0.3168878373, 98.9848834925],
    [0.3075572909, 0.3166338882, 99.4883738450],
    [0.3089072090, 0.3165920479, 99.7472201942],
    [0.3097962639, 0.3169979070, 99.8789893280],
    [0.3109473758, 0.3188610188, 99.9316728167],
    [0.3143915846, 0.3262413621, 99.9242136148],
    [0.3234181716, 0.3458682678, 99.8159707213],
    [0.3379928787, 0.3764850770, 99.5602165482],
    [0.3569436976, 0.4139323466, 99.1207918674],
    [0.3799704593, 0.4554525924, 98.4285073200],
    [0.4036468390, 0.4922414632, 97.3712778248],
    [0.4241636952, 0.5158536895, 95.7538035392],
    [0.4412126449, 0.5257941168, 93.3957217812],
    [0.4571795578, 0.5253280019, 89.9949757493],
    [0.4744579741, 0.5164658676, 85.1620574375],
    [0.4939710450, 0.5004729694, 78.7007126412],
    [0.5154911985, 0.4784977277, 70.7687410307],
    [0.5359197033, 0.4476330496, 61.6293816317],
    [0.5412314907, 0.3965926014, 51.8353280057],
    [0.5113967534, 0.3174089921, 42.1170410127],
    [0.4595519078, 0.2367407905, 33.2322884202],
    [0.4028789913, 0.1724313387, 25.6832387879],
    [0.3471099697, 0.1260533563, 19.7503962182],
    [0.2968572056, 0.0963963394, 15.4921273549],
    [0.2524760889, 0.0806330780, 12.9335784773],
    [0.2136290802, 0.0767472883, 12.1391609914],
    [0.1817467663, 0.0850371500, 13.3496820103],
    [0.1574780928, 0.1057512654, 16.7395785493],
    [0.1422225282, 0.1370645453, 22.3150589864],
    [0.1365248834, 0.1741681576, 29.7457737389],
    [0.1395628580, 0.2123405515, 38.6349125834],
    [0.1497968796, 0.2470377913, 48.3316984885],
    [0.1658168403, 0.2751824722, 58.1106038597],
    [0.1857035822, 0.2954441958, 67.2284305560],
    [0.2075859658, 0.3083211315, 75.2058311889],
    [0.2296581865, 0.3153019746, 81.8256800950],
    [0.2503516762, 0.3182854144, 87.1387003622],
    [0.2684865503, 0.3189732559, 91.3136126390],
    [0.2830702243, 0.3186071019, 94.4656086379],
    [0.2935505132, 0.3179515182, 96.6555894953],
    [0.3006200077, 0.3173365071, 98.0985681571],
    [0.3075469490, 0.3166097339, 99.4884947253],
    [0.3088606181, 0.3164845674, 99.7477544341],
    [0.3095840183, 0.3165123170, 99.8813437028],
    [0.3101097983, 0.3169599604, 99.9408328512],
    [0.3110971314, 0.3188420941, 99.9610694025],
    [0.3144651096, 0.3262307048, 99.9384326228],
    [0.3234542405, 0.3458612043, 99.8226872377],
    [0.3380106625, 0.3764800929, 99.5633618760],
    [0.3569522567, 0.4139289772, 99.1222301730],
    [0.3799745823, 0.4554503832, 98.4291745563],
    [0.4036489018, 0.4922400495, 97.3716052439],
    [0.4241647279, 0.5158528564, 95.7539675305],
    [0.4412131715, 0.5257936490, 93.3958050449],
    [0.4571393243, 0.5252540404, 89.9950966296],
    [0.4742599322, 0.5161289110, 85.1625916773],
    [0.4929733740, 0.4989306452, 78.7030670160],
    [0.5111222716, 0.4724625413, 70.7779010652],
    [0.5177482883, 0.4255723045, 61.6662374193],
    [0.4967156321, 0.3500038948, 51.9577899072],
    [0.4579236154, 0.2701669867, 42.3795117022],
    [0.4137645443, 0.2036317878, 33.6748584287],
    [0.3677830725, 0.1530847822, 26.3769616409],
    [0.3237869561, 0.1189148987, 20.8082929498],
    [0.2823631850, 0.0989562069, 17.1099290597],
    [0.2426445311, 0.0908091935, 15.2918242266],
    [0.2057393973, 0.0944755901, 15.5399902870],
    [0.1751289888, 0.1112576715, 18.1827212024],
    [0.1535959278, 0.1397325645, 23.2014575855],
    [0.1429353303, 0.1752036782, 30.2493849717],
    [0.1426974299, 0.2126350832, 38.8942931724],
    [0.1512938684, 0.2470879250, 48.4658219970],
    [0.1664430551, 0.2751719291, 58.1724473830],
    [0.1859707655, 0.2954295312, 67.2578271417],
    [0.2077017474, 0.3083116861, 75.2200501969],
    [0.2297074413, 0.3152971009, 81.8323966115],
    [0.2503726491, 0.3182831203, 87.1418456899],
    [0.2684953857, 0.3189722366, 91.3150509445],
    [0.2830740509, 0.3186066516, 94.4662758741],
    [0.2935523021, 0.3179513054, 96.6559169145],
    [0.3006208747, 0.3173364035, 98.0987321484],
    [0.3050252702, 0.3168877829, 98.9849667561],
    [0.3088502072, 0.3164604988, 99.7478753143],
    [0.3095372686, 0.3164050352, 99.8818779426],
    [0.3098972219, 0.3164747873, 99.9431872260],
    [0.3102589419, 0.3169418180, 99.9702294370],
    [0.3111695256, 0.3188329470, 99.9752884104],
    [0.3144998288, 0.3262256731, 99.9451491392],
    [0.3234711320, 0.3458578955, 99.8258325655],
    [0.3380188008, 0.3764778101, 99.5648001816],
    [0.3569562192, 0.4139274193, 99.1228974093],
    [0.3799766055, 0.4554492992, 98.4295019755],
    [0.4036499350, 0.4922393414, 97.3717692353],
    [0.4241652609, 0.5158524256, 95.7540507942],
    [0.4411765572, 0.5257222533, 93.3959259251],
    [0.4569597034, 0.5249241745, 89.9956308694],
    [0.4733674412, 0.5146123792, 85.1649460521],
    [0.4891430761, 0.4930233762, 78.7122270505],
    [0.4954950138, 0.4509634479, 70.8147568529],
    [0.4796812815, 0.3798889351, 61.7886993208],
    [0.4501800738, 0.3025101240, 52.2202605967],
    [0.4165117598, 0.2354655982, 42.8220817107],
    [0.3803756922, 0.1821077171, 34.3685812817],
    [0.3443863530, 0.1439357612, 27.4348583724],
    [0.3086440846, 0.1198128902, 22.4260946545],
    [0.2718903392, 0.1076191746, 19.4681748090],
    [0.2341675876, 0.1069916147, 18.6926535221],
    [0.1985077072, 0.1191898160, 20.3730294790],
    [0.1705642041, 0.1439699261, 24.6446002386],
    [0.1536589659, 0.1770208901, 31.1357835707],
    [0.1486248290, 0.2132143866, 39.3979044052],
    [0.1541450284, 0.2471906335, 48.7252025860],
    [0.1677891941, 0.2751515369, 58.3065708915],
    [0.1865310777, 0.2953990649, 67.3196706650],
    [0.2079409670, 0.3082921672, 75.2494467826],
    [0.2298116894, 0.3152867838, 81.8466156195],
    [0.2504174216, 0.3182782250, 87.1485622064],
    [0.2685146912, 0.3189700143, 91.3181962723],
    [0.2830823149, 0.3186056742, 94.4677141797],
    [0.2935559477, 0.3179508716, 96.6565841508],
    [0.3006226057, 0.3173361966, 98.0990595676],
    [0.3050261195, 0.3168876813, 98.9851307475],
    [0.3075473812, 0.3166096801, 99.4885779889],
    [0.3095268221, 0.3163810111, 99.8819988228],
    [0.3098503989, 0.3163675975, 99.9437214659],
    [0.3100462084, 0.3164568432, 99.9725838117],
    [0.3103310405, 0.3169330489, 99.9844484449],
    [0.3112037111, 0.3188286283, 99.9820049269],
    [0.3145160883, 0.3262233158, 99.9482944670],
    [0.3234788620, 0.3458563794, 99.8272708711],
    [0.3380225688, 0.3764767554, 99.5654674178],
    [0.3569581637, 0.4139266548, 99.1232248284],
    [0.3799776189, 0.4554487562, 98.4296659668],
    [0.4036504679, 0.4922389750, 97.3718524989],
    [0.4241324596, 0.5157854086, 95.7541716744],
    [0.4410130786, 0.5254038221, 93.3964601650],
    [0.4561500413, 0.5234393594, 89.9979852442],
    [0.4699380024, 0.5087997938, 85.1741060866],
    [0.4753892477, 0.4719027222, 78.7490828381],
    [0.4623291950, 0.4058718038, 70.9372187544],
    [0.4388869898, 0.3321381300, 62.0511700103],
    [0.4130500540, 0.2664848529, 52.6628306053],
    [0.3854931808, 0.2120481247, 43.5158045637],
    [0.3577218245, 0.1711187831, 35.4264780132],
    [0.3291714962, 0.1432604389, 29.0526600771],
    [0.2978605345, 0.1269880307, 24.7843404038],
    [0.2629928529, 0.1221536740, 22.8690041045],
    [0.2263330598, 0.1298658248, 23.5256927142],
    [0.1931205273, 0.1501848761, 26.8349085152],
    [0.1697025658, 0.1799696562, 32.5789262238],
    [0.1585588405, 0.2142603778, 40.2843030043],
    [0.1595421244, 0.2474047121, 49.2288138188],
    [0.1703542896, 0.2751190536, 58.5659514806],
    [0.1877357766, 0.2953355879, 67.4537941735],
    [0.2084426757, 0.3082514907, 75.3112903058],
    [0.2300270880, 0.3152654630, 81.8760122052],
    [0.2505121844, 0.3182678622, 87.1627812143],
    [0.2685559045, 0.3189652721, 91.3249127888],
    [0.2831003715, 0.3186035431, 94.4708595075],
    [0.2935638207, 0.3179499300, 96.6580224563],
    [0.3006261332, 0.3173357751, 98.0997268039],
    [0.3050278151, 0.3168874783, 98.9854581666],
    [0.3075482205, 0.3166095796, 99.4887419802],
    [0.3088506368, 0.3164604453, 99.7479585780],
    [0.3098399360, 0.3163435940, 99.9438423461],
    [0.3099993505, 0.3163496972, 99.9731180516],
    [0.3101182311, 0.3164481701, 99.9868028197],
    [0.3103650865, 0.3169289088, 99.9911649614],
    [0.3112197207, 0.3188266049, 99.9851502546],
    [0.3145235291, 0.3262222351, 99.9497327726],
    [0.3234824410, 0.3458556796, 99.8279381073],
    [0.3380244177, 0.3764762378, 99.5657948370],
    [0.3569591376, 0.4139262720, 99.1233888198],
    [0.3799781413, 0.4554484747, 98.4297492305],
    [0.4036222132, 0.4921789944, 97.3719733792],
    [0.4239859895, 0.5154864963, 95.7547059143],
    [0.4402760164, 0.5239702999, 93.3988145397],
    [0.4530367209, 0.5177452704, 90.0071452787],
    [0.4575890051, 0.4879638686, 85.2109618743],
    [0.4459248539, 0.4272029117, 78.8715447396],
    [0.4261301133, 0.3578747715, 71.1996894439],
    [0.4055788319, 0.2950315184, 62.4937400189],
    [0.3846094620, 0.2414589305, 53.3565534582],
    [0.3640915673, 0.1994183449, 44.5737012952],
    [0.3429052363, 0.1689823553, 37.0442797180],
    [0.3184084874, 0.1490145835, 31.4109058264],
    [0.2887791619, 0.1398858269, 28.1851696994],
    [0.2547052302, 0.1430465931, 27.7020432966],
    [0.2200959137, 0.1587452641, 29.9875717503],
    [0.1911151613, 0.1844278001, 34.7692345004],
    [0.1734647521, 0.2160336003, 41.7274456574],
    [0.1686038909, 0.2478302921, 50.1152124179],
    [0.1752145337, 0.2750748638, 59.0695627133],
    [0.1900322914, 0.2952202727, 67.7131747626],
    [0.2095215283, 0.3081658596, 75.4454138144],
    [0.2304788647, 0.3152209847, 81.9378557284],
    [0.2507079910, 0.3182464465, 87.1921778001],
    [0.2686431353, 0.3189552331, 91.3391317967],
    [0.2831389187, 0.3185989957, 94.4775760239],
    [0.2935810231, 0.3179478771, 96.6611677841],
    [0.3006337513, 0.3173348599, 98.1011651094],
    [0.3050312707, 0.3168870648, 98.9861254029],
    [0.3075498963, 0.3166093790, 99.4890693994],
    [0.3088514710, 0.3164603454, 99.7481225693],
    [0.3095272504, 0.3163809577, 99.8820820865],
    [0.3099888798, 0.3163257035, 99.9732389318],
    [0.3100713564, 0.3163410452, 99.9873370596],
    [0.3101522412, 0.3164440752, 99.9935193362],
    [0.3103810308, 0.3169269691, 99.9943102892],
    [0.3112270471, 0.3188256770, 99.9865885602],
    [0.3145269742, 0.3262217369, 99.9504000088],
    [0.3234841972, 0.3458553362, 99.8282655265],
    [0.3380253438, 0.3764759786, 99.5659588283],
    [0.3569596395, 0.4139260728, 99.1234720834],
    [0.3799549463, 0.4553977182, 98.4298701107],
    [0.4034960254, 0.4919114532, 97.3725076190],
    [0.4233254385, 0.5141406443, 95.7570602890],
    [0.4374400153, 0.5184702159, 93.4079745743],
    [0.4418013663, 0.4972938214, 90.0440010663],
    [0.4309537764, 0.4435830927, 85.3334237758],
    [0.4133319783, 0.3789994979, 79.1340154291],
    [0.3960496958, 0.3199049555, 71.6422594524],
    [0.3795974847, 0.2686817197, 63.1874628718],
    [0.3646849727, 0.2274113798, 54.4144501898],
    [0.3499820786, 0.1959676871, 46.1915030000],
    [0.3324369763, 0.1734155303, 39.4025254673],
    [0.3093826898, 0.1603436094, 34.8117351220],
    [0.2802614290, 0.1587952811, 33.0182088915],
    [0.2477635715, 0.1696259790, 34.1639223327],
    [0.2168573933, 0.1908025110, 37.9218977356],
    [0.1934424811, 0.2188742198, 43.9177539340],
    [0.1822401418, 0.2486504223, 51.5583550710],
    [0.1833885644, 0.2750590259, 59.9559613124],
    [0.1943872158, 0.2950171055, 68.2167859954],
    [0.2115788058, 0.3080077295, 75.7047944034],
    [0.2314504428, 0.3151270256, 82.0719792370],
    [0.2511186934, 0.3182017519, 87.2540213233],
    [0.2688233834, 0.3189344863, 91.3685283825],
    [0.2832205073, 0.3185893690, 94.4917950319],
    [0.2936177468, 0.3179434965, 96.6678843006],
    [0.3006503968, 0.3173328647, 98.1043104372],
    [0.3050387334, 0.3168861669, 98.9875637085],
    [0.3075533111, 0.3166089701, 99.4897366357],
    [0.3088531365, 0.3164601460, 99.7484499885],
    [0.3095280819, 0.3163808582, 99.8822460778],
    [0.3098403637, 0.3163435407, 99.9439256097],
    [0.3100608819, 0.3163170562, 99.9874579398],
    [0.3101053586, 0.3163369603, 99.9940535760],
    [0.3101681687, 0.3164421567, 99.9966646639],
    [0.3103883273, 0.3169260794, 99.9957485947],
    [0.3112304393, 0.3188252495, 99.9872557965],
    [0.3145286647, 0.3262214924, 99.9507274280],
    [0.3234850768, 0.3458551642, 99.8284295178],
    [0.3380258209, 0.3764758430, 99.5660420920],
    [0.3569410470, 0.4138844881, 99.1235929637],
    [0.3798513334, 0.4551713062, 98.4304043506],
    [0.4029267371, 0.4907065966, 97.3748619938],
    [0.4207818827, 0.5089739687, 95.7662203236],
    [0.4271846212, 0.4986801902, 93.4448303619],
    [0.4174385303, 0.4535183196, 90.1664629679],
    [0.4011986307, 0.3952762204, 85.5958944653],
    [0.3858867028, 0.3403700538, 79.5765854377],
    [0.3722424287, 0.2924983334, 72.3359823054],
    [0.3611510758, 0.2534555603, 64.2453596034],
    [0.3514309288, 0.2228198627, 56.0322518945],
    [0.3399899862, 0.1992156450, 48.5497487493],
    [0.3236665160, 0.1832878420, 42.8033547628],
    [0.3008663477, 0.1773422276, 39.6447743141],
    [0.2728608166, 0.1830499675, 39.4800879276],
    [0.2434272431, 0.1992787114, 42.0982483180],
    [0.2175913796, 0.2232121459, 47.0704171691],
    [0.2005911485, 0.2501646694, 53.7486633476],
    [0.1957212444, 0.2751943133, 61.3991039655],
    [0.2017218366, 0.2947272359, 69.1031845944],
    [0.2154826628, 0.3077217369, 76.2084056362],
    [0.2333036029, 0.3149525720, 82.3313598260],
    [0.2520019952, 0.3181072151, 87.3881448319],
    [0.2692014637, 0.3188911821, 91.4303719057],
    [0.2833891003, 0.3185694737, 94.5211916176],
    [0.2936954763, 0.3179342227, 96.6821033085],
    [0.3006859315, 0.3173286072, 98.1110269537],
    [0.3050550393, 0.3168842093, 98.9907090362],
    [0.3075606860, 0.3166080823, 99.4911749412],
    [0.3088565305, 0.3164597395, 99.7491172247],
    [0.3095297421, 0.3163806594, 99.8825734970],
    [0.3098411940, 0.3163434413, 99.9440896011],
    [0.3099893072, 0.3163256502, 99.9733221955],
    [0.3100948823, 0.3163129736, 99.9941744562],
    [0.3101212824, 0.3163350465, 99.9971989038],
    [0.3101754575, 0.3164412768, 99.9981029695],
    [0.3103917056, 0.3169256697, 99.9964158310],
    [0.3112321038, 0.3188250398, 99.9875832156],
    [0.3145295114, 0.3262213699, 99.9508914194],
    [0.3234855299, 0.3458550735, 99.8285127815],
    [0.3380107289, 0.3764416367, 99.5661629722],
    [0.3568579730, 0.4136989762, 99.1241272035],
    [0.3793836623, 0.4541513914, 98.4327587253],
    [0.4007322882, 0.4860775631, 97.3840220283],
    [0.4115620129, 0.4903448254, 95.8030761112],
    [0.4048365524, 0.4561326488, 93.5672922634],
    [0.3900082194, 0.4055300292, 90.4289336574],
    [0.3758895981, 0.3562017307, 86.0384644738],
    [0.3639140108, 0.3121540561, 80.2703082906],
    [0.3551451244, 0.2763263120, 73.3938790369],
    [0.3487676364, 0.2479143270, 65.8631613081],
    [0.3420010838, 0.2250431682, 58.3904976438],
    [0.3316071651, 0.2077850452, 51.9505780448],
    [0.3153495586, 0.1985071066, 47.6363939549],
    [0.2932751287, 0.1993375127, 46.1066533502],
    [0.2677032344, 0.2102401321, 47.4144139128],
    [0.2426775894, 0.2294140356, 51.2467677515],
    [0.2228917466, 0.2528074898, 56.9013265827],
    [0.2123797670, 0.2757417779, 63.5894122421],
    [0.2128126963, 0.2944315370, 70.5463272475],
    [0.2220651405, 0.3072870301, 77.0948042352],
    [0.2368219456, 0.3146343507, 82.8349710588],
    [0.2536870687, 0.3179313306, 87.6475254209],
    [0.2700146361, 0.3187995532, 91.5644954143],
    [0.2837427408, 0.3185279468, 94.5830351409],
    [0.2938560973, 0.3179150566, 96.7114998942],
    [0.3007611448, 0.3173195941, 98.1252459616],
    [0.3050898492, 0.3168800323, 98.9974255527],
    [0.3075768000, 0.3166061469, 99.4943202690],
    [0.3088638603, 0.3164588570, 99.7505555303],
    [0.3095331253, 0.3163802542, 99.8832407333],
    [0.3098428517, 0.3163432428, 99.9444170202],
    [0.3099901369, 0.3163255509, 99.9734861868],
    [0.3100613091, 0.3163170030, 99.9875412034],
    [0.3101108053, 0.3163110608, 99.9973197840],
    [0.3101285695, 0.3163341687, 99.9986372094],
    [0.3101788323, 0.3164408715, 99.9987702058],
    [0.3103933634, 0.3169254686, 99.9967432502],
    [0.3112329375, 0.3188249347, 99.9877472070],
    [0.3145299476, 0.3262213048, 99.9509746830],
    [0.3234729284, 0.3458263150, 99.8286336617],
    [0.3379432787, 0.3762890302, 99.5666972121],
    [0.3564828002, 0.4128630560, 99.1264815783],
    [0.3775784104, 0.4502289259, 98.4419187598],
    [0.3927516657, 0.4693393730, 97.4208778159],
    [0.3913531813, 0.4500874112, 95.9255380127],
    [0.3794903484, 0.4091905968, 93.8297629529],
    [0.3664846893, 0.3664370679, 90.8715036659],
    [0.3554411504, 0.3274153909, 86.7321873268],
    [0.3479812004, 0.2952540962, 81.3282050222],
    [0.3435658929, 0.2700233050, 75.0116807417],
    [0.3399049032, 0.2492891671, 68.2214070574],
    [0.3340675165, 0.2324906648, 61.7913269394],
    [0.3236254964, 0.2214103680, 56.7836172369],
    [0.3078085272, 0.2183820031, 54.0982729911],
    [0.2876181298, 0.2241014331, 54.0409793354],
    [0.2657597364, 0.2380063329, 56.5629333464],
    [0.2461996046, 0.2570811230, 61.0776771651],
    [0.2327206577, 0.2771258080, 66.7420754773],
    [0.2278407564, 0.2943585548, 72.7366355241],
    [0.2320363656, 0.3067582987, 78.5379468883],
    [0.2427596020, 0.3141412154, 83.7213696579],
    [0.2568875215, 0.3176094566, 88.1511366537],
    [0.2715661061, 0.3186289748, 91.8238760033],
    [0.2845033638, 0.3184400821, 94.7171586494],
    [0.2941930200, 0.3178750533, 96.7733434175],
    [0.3009165678, 0.3173009664, 98.1546425473],
    [0.3051635286, 0.3168711894, 99.0116445607],
    [0.3076112002, 0.3166020170, 99.5010367855],
    [0.3088798758, 0.3164569332, 99.7537008581],
    [0.3095404318, 0.3163793745, 99.8846790388],
    [0.3098462299, 0.3163428382, 99.9450842565],
    [0.3099917934, 0.3163253525, 99.9738136060],
    [0.3100621385, 0.3163169037, 99.9877051948],
    [0.3100953094, 0.3163129204, 99.9942577199],
    [0.3101180920, 0.3163101835, 99.9987580896],
    [0.3101319435, 0.3163337644, 99.9993044456],
    [0.3101804883, 0.3164406727, 99.9990976249],
    [0.3103941937, 0.3169253679, 99.9969072415],
    [0.3112333669, 0.3188248786, 99.9878304706],
    [0.3145187877, 0.3261957724, 99.9510955632],
    [0.3234165962, 0.3456980062, 99.8291679016],
    [0.3376385044, 0.3756011996, 99.5690515868],
    [0.3550323824, 0.4096447698, 99.1356416128],
    [0.3709849173, 0.4359934587, 98.4787745475],
    [0.3751178947, 0.4329146859, 97.5433397175],
    [0.3682344593, 0.4053426809, 96.1880087022],
    [0.3575849599, 0.3707087891, 94.2723329615],
    [0.3473312602, 0.3374532092, 91.5652265189],
    [0.3404919050, 0.3099916382, 87.7900840583],
    [0.3371019454, 0.2883646145, 82.9460067269],
    [0.3352247766, 0.2707213278, 77.3699264910],
    [0.3324210049, 0.2558119534, 71.6222363530],
    [0.3264896825, 0.2447425261, 66.6243661314],
    [0.3163123641, 0.2393730415, 63.2454962731],
    [0.3019566939, 0.2408388811, 62.0325989763],
    [0.2848408658, 0.2494914566, 63.1894987690],
    [0.2677807304, 0.2636211342, 66.3938427600],
    [0.2540935428, 0.2799333662, 70.9184260597],
    [0.2462638410, 0.2949141790, 75.8892987593],
    [0.2455806976, 0.3063390259, 80.7282551650],
    [0.2517661221, 0.3135132716, 85.1645123110],
    [0.2622921898, 0.3171071101, 89.0375352527],
    [0.2745136297, 0.3183164905, 92.3274872361],
    [0.2859546843, 0.3182765142, 94.9765392385],
    [0.2949176928, 0.3177904269, 96.9074669260],
    [0.3012425895, 0.3172620887, 98.2164860706],
    [0.3053157825, 0.3168529134, 99.0410411464],
    [0.3076840126, 0.3165932740, 99.5152557934],
    [0.3089140658, 0.3164528280, 99.7604173745],
    [0.3095563964, 0.3163774567, 99.8878243666],
    [0.3098535257, 0.3163419598, 99.9465225621],
    [0.3099951693, 0.3163249482, 99.9744808422],
    [0.3100637946, 0.3163167054, 99.9880326139],
    [0.3100961388, 0.3163128211, 99.9944217112],
    [0.3101112324, 0.3163110076, 99.9974030477],
    [0.3101214658, 0.3163097794, 99.9994253258],
    [0.3101335991, 0.3163335660, 99.9996318648],
    [0.3101813177, 0.3164405731, 99.9992616163],
    [0.3103946213, 0.3169253140, 99.9969905052],
    [0.3112227200, 0.3188005085, 99.9879513509],
    [0.3144688920, 0.3260818532, 99.9516298031],
    [0.3231619408, 0.3451195646, 99.8315222763],
    [0.3364585833, 0.3729505767, 99.5782116213],
    [0.3497102403, 0.3979196029, 99.1724974004],
    [0.3562615713, 0.4047343956, 98.6012364490],
    [0.3547019387, 0.3920202921, 97.8058104069],
    [0.3480694314, 0.3684004894, 96.6305787108],
    [0.3396158446, 0.3420249488, 94.9660558144],
    [0.3332269707, 0.3197827410, 92.6231232504],
    [0.3302071696, 0.3026746709, 89.4078857631],
    [0.3292134166, 0.2885434003, 85.3042524762],
    [0.3281528007, 0.2765098653, 80.7707557865],
    [0.3252558981, 0.2669318324, 76.4552755450],
    [0.3195089077, 0.2610482629, 73.0862451676],
    [0.3105071267, 0.2597245837, 71.1798222583],
    [0.2987037645, 0.2639300640, 71.1811184099],
    [0.2857308161, 0.2730006363, 73.0204081826],
    [0.2739828196, 0.2848695281, 76.2345916545],
    [0.2657030012, 0.2967258669, 80.0656493417],
    [0.2622359009, 0.3064138456, 83.8809184001],
    [0.2640224379, 0.3129359610, 87.3548205876],
    [0.2704982070, 0.3164572243, 90.4806779058],
    [0.2794934629, 0.3178277620, 93.2138858351],
    [0.2887124744, 0.3179768594, 95.4801504712],
    [0.2963004814, 0.3176329247, 97.1668475151],
    [0.3019438187, 0.3171798589, 98.3506095791],
    [0.3056351581, 0.3168147713, 99.1028846696],
    [0.3078344753, 0.3165752043, 99.5446523792],
    [0.3089864332, 0.3164441372, 99.7746363825],
    [0.3095904777, 0.3163733644, 99.8945408831],
    [0.3098694668, 0.3163400448, 99.9496678899],
    [0.3100024600, 0.3163240704, 99.9759191478],
    [0.3100671692, 0.3163163012, 99.9886998502],
    [0.3100977945, 0.3163126228, 99.9947491304],
    [0.3101120616, 0.3163109083, 99.9975670390],
    [0.3101185191, 0.3163101303, 99.9988413532],
    [0.3101231214, 0.3163095812, 99.9997527450],
    [0.3101344284, 0.3163334667, 99.9997958561],
    [0.3101817449, 0.3164405197, 99.9993448799],
    [0.3103841036, 0.3169012380, 99.9971113854],
    [0.3111751150, 0.3186917739, 99.9884855907],
    [0.3142432623, 0.3255682100, 99.9539841778],
    [0.3221748715, 0.3428888058, 99.8406823108],
    [0.3321108513, 0.3632608152, 99.6150674090],
    [0.3376891722, 0.3719261301, 99.2949593020],
    [0.3389430901, 0.3691787261, 98.8637071385],
    [0.3366649069, 0.3579321066, 98.2483804155],
    [0.3313812275, 0.3407081667, 97.3243015637],
    [0.3262896783, 0.3244488852, 96.0239525460],
    [0.3234551888, 0.3122264828, 94.2409249551],
    [0.3227018370, 0.3024717986, 91.7661315124],
    [0.3224977810, 0.2937703897, 88.7050817718],
    [0.3213708661, 0.2867313790, 85.6037949786],
    [0.3186446009, 0.2818658926, 82.9171545812],
    [0.3139107405, 0.2795568218, 81.0205711528],
    [0.3070792799, 0.2806849231, 80.3283416919],
    [0.2988488243, 0.2853570147, 81.0120278235],
    [0.2905921207, 0.2925553160, 82.8611570771],
    [0.2838546533, 0.3005319480, 85.3818149365],
    [0.2798620848, 0.3076192806, 88.0572689825],
    [0.2791269817, 0.3127736472, 90.5074838227],
    [0.2816795421, 0.3158327408, 92.6709861824],
    [0.2870595562, 0.3171927009, 94.6570284882],
    [0.2933732097, 0.3175082151, 96.3665490703],
    [0.2989283729, 0.3173444723, 97.6704587479],
    [0.3032819089, 0.3170268576, 98.6099901682],
    [0.3063220935, 0.3167341088, 99.2370081782],
    [0.3081500944, 0.3165374938, 99.6064959024],
    [0.3091359767, 0.3164261753, 99.8040329682],
    [0.3096626150, 0.3163647009, 99.9087598910],
    [0.3099034978, 0.3163359585, 99.9563844063],
    [0.3100183899, 0.3163221568, 99.9790644756],
    [0.3100744575, 0.3163154237, 99.9901381558],
    [0.3101011686, 0.3163122187, 99.9954163667],
    [0.3101137172, 0.3163107100, 99.9978944582],
    [0.3101193483, 0.3163100310, 99.9990053446],
    [0.3101218929, 0.3163097262, 99.9995085895],
    [0.3101239506, 0.3163094819, 99.9999167364],
    [0.3101348554, 0.3163334135, 99.9998791198],
    [0.3101712599, 0.3164165184, 99.9994657601],
    [0.3103370751, 0.3167938148, 99.9976456252],
    [0.3109598166, 0.3182014812, 99.9908399655],
    [0.3133680020, 0.3235864016, 99.9631442124],
    [0.3185251361, 0.3347117625, 99.8775380985],
    [0.3221887417, 0.3415994999, 99.7375293105],
    [0.3233020023, 0.3419467192, 99.5574299914],
    [0.3233789464, 0.3391714531, 99.3062771470],
    [0.3215540588, 0.3321941484, 98.9421032685],
    [0.3189013974, 0.3236736803, 98.3821982953],
    [0.3169926482, 0.3168629057, 97.6417542507],
    [0.3162801434, 0.3117813585, 96.5991707044],
    [0.3162870513, 0.3072839263, 95.1669608079],
    [0.3160504983, 0.3033049998, 93.5381209638],
    [0.3151196420, 0.3005731622, 92.0656740148],
    [0.3133359061, 0.2988357591, 90.8514805664],
    [0.3105250883, 0.2986266216, 90.1690905864],
    [0.3068204407, 0.3001435718, 90.1592511055],
    [0.3027538066, 0.3031901049, 90.8527767180],
    [0.2990356779, 0.3069786306, 92.0083803592],
    [0.2963493397, 0.3107000337, 93.3734345774],
    [0.2951414894, 0.3136532850, 94.6838344051],
    [0.2954795682, 0.3155805129, 95.8236494176],
    [0.2973778482, 0.3165757094, 96.8473367648],
    [0.3004576531, 0.3168995101, 97.8096917234],
    [0.3033704490, 0.3168937077, 98.5568573469],
    [0.3058250487, 0.3167467529, 99.1136014010],
    [0.3076329279, 0.3165840550, 99.4963887672],
    [0.3088289504, 0.3164577512, 99.7406194109],
    [0.3094496680, 0.3163886903, 99.8658764915],
    [0.3098116832, 0.3163467955, 99.9381564767],
    [0.3099755289, 0.3163273078, 99.9706034143],
    [0.3100523971, 0.3163180733, 99.9857809920],
    [0.3100903819, 0.3163135107, 99.9932834835],
    [0.3101084557, 0.3163113414, 99.9968546722],
    [0.3101170911, 0.3163103060, 99.9985616944],
    [0.3101210039, 0.3163098327, 99.9993327637],
    [0.3101227221, 0.3163096269, 99.9996725808],
    [0.3101235484, 0.3163095280, 99.9998360087],
    [0.3101243776, 0.3163094287, 100.0000000000],
];

/// Optimal colour stimuli for illuminant D65.
pub static ILLUMINANT_D65_OPTIMAL_COLOUR_STIMULI: [[f64; 3]; OPTIMAL_COLOUR_STIMULI_SAMPLES] = [
    [0.3127319391, 0.3291312484, 0.0000000000],
    [0.1741122566, 0.0049637266, 0.0001844279],
    [0.1738008438, 0.0049154139, 0.0006205290],
    [0.1733368865, 0.0047967440, 0.0031009437],
    [0.1725765508, 0.0047993019, 0.0104747819],
    [0.1714074339, 0.0051021710, 0.0353638618],
    [0.1688775207, 0.0069002439, 0.0951466261],
    [0.1644117564, 0.0108575583, 0.2282250834],
    [0.1566409326, 0.0177048050, 0.4207306293],
    [0.1439603960, 0.0297029703, 0.6688762203],
    [0.1241184767, 0.0578025134, 0.9888342549],
    [0.0912935157, 0.1327020552, 1.5249368990],
    [0.0453907347, 0.2949759646, 2.1418195128],
    [0.0081680280, 0.5384230705, 3.3422749426],
    [0.0138702461, 0.7501864280, 5.1309736038],
    [0.0743024239, 0.8338030815, 7.0401703247],
    [0.1547220612, 0.8058635454, 8.7838232281],
    [0.2296196726, 0.7543290899, 9.4248543976],
    [0.3016038688, 0.6923076923, 9.7956130735],
    [0.3731015439, 0.6244508598, 9.4151676567],
    [0.4440624636, 0.5547139028, 8.6780554489],
    [0.5124863671, 0.4865907883, 7.8856107454],
    [0.5751513114, 0.4242322349, 6.3526359106],
    [0.6270365998, 0.3724911452, 5.3741126155],
    [0.6657635762, 0.3340106512, 4.2645833753],
    [0.6915039979, 0.3083422356, 3.1617178311],
    [0.7079177916, 0.2920271089, 2.0885092987],
    [0.7190329416, 0.2809349515, 1.3860035189],
    [0.7259923175, 0.2740076825, 0.8102596390],
    [0.7299690128, 0.2700309872, 0.4630077222],
    [0.7319932998, 0.2680067002, 0.2491366533],
    [0.7334169672, 0.2665830328, 0.1259296558],
    [0.7343901650, 0.2656098350, 0.0541643593],
    [0.7346872777, 0.2653127223, 0.0277951389],
    [0.7346783403, 0.2653216597, 0.0147107272],
    [0.7346680182, 0.2653319818, 0.0061032417],
    [0.7346938776, 0.2653061224, 0.0034387137],
    [0.7348242812, 0.2651757188, 0.0017691680],
    [0.7345132743, 0.2654867257, 0.0007220936],
    [0.7345132743, 0.2654867257, 0.0002635388],
    [0.7345132743, 0.2654867257, 0.0001896434],
    [0.7368421053, 0.2631578947, 0.0000899638],
    [0.1738716567, 0.0049263999, 0.0008049570],
    [0.1734126855, 0.0048161317, 0.0037214727],
    [0.1727502968, 0.0047987174, 0.0135757256],
    [0.1716874158, 0.0050296394, 0.0458386436],
    [0.1697238125, 0.0062987630, 0.1305104878],
    [0.1661807881, 0.0092899398, 0.3233717094],
    [0.1602883005, 0.0144909336, 0.6489557126],
    [0.1504711915, 0.0235425370, 1.0896068496],
    [0.1353943423, 0.0418339639, 1.6577104752],
    [0.1109287912, 0.0878985554, 2.5137711538],
    [0.0735198229, 0.1955349938, 3.6667564117],
    [0.0282351108, 0.4071786319, 5.4840944554],
    [0.0111572600, 0.6494342246, 8.4732485464],
    [0.0472572990, 0.7963822418, 12.1711439285],
    [0.1196185586, 0.8180592679, 15.8239935528],
    [0.1947232383, 0.7783401192, 18.2086776257],
    [0.2678472845, 0.7213922782, 19.2204674711],
    [0.3384881576, 0.6573016448, 19.2107807303],
    [0.4092364669, 0.5889392066, 18.0932231056],
    [0.4788777009, 0.5200517120, 16.5636661943],
    [0.5425814217, 0.4566428790, 14.2382466560],
    [0.6006113665, 0.3988429380, 11.7267485261],
    [0.6452183661, 0.3544250989, 9.6386959908],
    [0.6772284106, 0.3225778885, 7.4263012064],
    [0.6982482065, 0.3016385680, 5.2502271298],
    [0.7124552881, 0.2874989986, 3.4745128175],
    [0.7216410239, 0.2783389015, 2.1962631578],
    [0.7274518728, 0.2725481272, 1.2732673612],
    [0.7306806581, 0.2693193419, 0.7121443755],
    [0.7324729931, 0.2675270069, 0.3750663091],
    [0.7337104114, 0.2662895886, 0.1800940151],
    [0.7344910001, 0.2655089999, 0.0819594982],
    [0.7346841846, 0.2653158154, 0.0425058661],
    [0.7346753137, 0.2653246863, 0.0208139689],
    [0.7346773380, 0.2653226620, 0.0095419554],
    [0.7347381913, 0.2652618087, 0.0052078817],
    [0.7347342107, 0.2652657893, 0.0024912616],
    [0.7345132743, 0.2654867257, 0.0009856324],
    [0.7345132743, 0.2654867257, 0.0004531822],
    [0.7352670617, 0.2647329383, 0.0002796072],
    [0.1792426974, 0.0073176979, 0.0002743917],
    [0.1734447805, 0.0048229031, 0.0039059007],
    [0.1727951734, 0.0048037024, 0.0141962546],
    [0.1717966691, 0.0050142135, 0.0489395873],
    [0.1699956719, 0.0061558678, 0.1409852697],
    [0.1670487004, 0.0085945385, 0.3587355712],
    [0.1623103385, 0.0127039654, 0.7441023387],
    [0.1548251172, 0.0195807567, 1.3178319329],
    [0.1433593150, 0.0327883670, 2.0784411044],
    [0.1254802638, 0.0622615490, 3.1826473741],
    [0.0976583606, 0.1298284894, 4.6555906666],
    [0.0572668723, 0.2808110443, 7.0090313543],
    [0.0233971495, 0.5227006701, 10.6150680592],
    [0.0359664088, 0.7218710372, 15.5134188711],
    [0.0919946106, 0.8003292848, 20.9549671566],
    [0.1627872975, 0.7930490538, 25.2488479504],
    [0.2350039522, 0.7459165869, 28.0042906992],
    [0.3058849488, 0.6863587778, 28.6356351278],
    [0.3752965191, 0.6215345454, 27.8888361791],
    [0.4448925134, 0.5535944754, 25.9788338510],
    [0.5096659306, 0.4894087138, 22.9163021048],
    [0.5692978485, 0.4300224433, 19.6123592715],
    [0.6203376218, 0.3792135463, 15.9913319014],
    [0.6578917764, 0.3418072084, 12.8004138220],
    [0.6845024516, 0.3153366990, 9.5148105051],
    [0.7028384412, 0.2970662480, 6.6362306487],
    [0.7151164328, 0.2848468404, 4.2847724565],
    [0.7231276642, 0.2768558448, 2.6592708800],
    [0.7282055666, 0.2717944334, 1.5224040145],
    [0.7310953987, 0.2689046013, 0.8380740313],
    [0.7327164444, 0.2672835556, 0.4292306685],
    [0.7338414365, 0.2661585635, 0.2078891540],
    [0.7345195256, 0.2654804744, 0.0966702254],
    [0.7346821549, 0.2653178451, 0.0486091078],
    [0.7346779459, 0.2653220541, 0.0242526826],
    [0.7347003320, 0.2652996680, 0.0113111234],
    [0.7347108235, 0.2652891765, 0.0059299753],
    [0.7347130906, 0.2652869094, 0.0027548004],
    [0.7345132743, 0.2654867257, 0.0011752758],
    [0.7349018533, 0.2650981467, 0.0005431460],
    [0.1896229415, 0.0121439171, 0.0004640351],
    [0.1750470580, 0.0054655501, 0.0008949207],
    [0.1728115268, 0.0048056893, 0.0143806825],
    [0.1718222607, 0.0050129519, 0.0495601163],
    [0.1700873949, 0.0061185571, 0.1440862134],
    [0.1673233861, 0.0084059485, 0.3692103531],
    [0.1632729307, 0.0118995957, 0.7794662005],
    [0.1572146083, 0.0174245439, 1.4129785590],
    [0.1486018611, 0.0273270870, 2.3066661878],
    [0.1353691638, 0.0481213780, 3.6033780034],
    [0.1155188736, 0.0912061454, 5.3244668869],
    [0.0844529364, 0.1901217592, 7.9978656092],
    [0.0479329214, 0.3817665145, 12.1400049581],
    [0.0383464531, 0.6140618201, 17.6552383839],
    [0.0759295195, 0.7501358131, 24.2972420992],
    [0.1364531648, 0.7854693303, 30.3798215542],
    [0.2054982821, 0.7620530229, 35.0444610239],
    [0.2745731263, 0.7111129495, 37.4194583559],
    [0.3435676099, 0.6504576457, 37.3136905767],
    [0.4116978578, 0.5857291744, 35.7744469245],
    [0.4764028330, 0.5223010380, 32.3314697616],
    [0.5373118104, 0.4618695588, 28.2904147204],
    [0.5903966725, 0.4090229033, 23.8769426468],
    [0.6342575718, 0.3653513103, 19.1530497325],
    [0.6659134445, 0.3338249728, 14.8889231206],
    [0.6893549696, 0.3105022730, 10.9008140240],
    [0.7055450671, 0.2943707638, 7.4464902877],
    [0.7166362094, 0.2833308218, 4.7477801787],
    [0.7239099648, 0.2760749993, 2.9084075334],
    [0.7286108859, 0.2713891141, 1.6483336703],
    [0.7312977399, 0.2687022601, 0.8922383907],
    [0.7328371412, 0.2671628588, 0.4570258074],
    [0.7338969070, 0.2661030930, 0.2225998812],
    [0.7345283485, 0.2654716515, 0.1027734671],
    [0.7346829295, 0.2653170705, 0.0520478215],
    [0.7346879001, 0.2653120999, 0.0260218506],
    [0.7346891144, 0.2653108856, 0.0120332170],
    [0.7347024236, 0.2652975764, 0.0061935141],
    [0.7347002301, 0.2652997699, 0.0029444438],
    [0.7346802242, 0.2653197758, 0.0012652396],
    [0.2034198118, 0.0185586719, 0.0007275739],
    [0.1774771775, 0.0065949883, 0.0010845642],
    [0.1736825029, 0.0049319061, 0.0039958644],
    [0.1718308348, 0.0050127676, 0.0497445443],
    [0.1701071958, 0.0061121417, 0.1447067424],
    [0.1674106114, 0.0083535974, 0.3723112968],
    [0.1635729292, 0.0116706442, 0.7899409823],
    [0.1583321925, 0.0164542446, 1.4483424208],
    [0.1514489404, 0.0244587788, 2.4018128139],
    [0.1417348273, 0.0399537553, 3.8316030868],
    [0.1274154626, 0.0699422481, 5.7451975162],
    [0.1052010942, 0.1341893707, 8.6667418295],
    [0.0745819467, 0.2684468066, 13.1288392130],
    [0.0534655468, 0.4766089942, 19.1801752829],
    [0.0703372399, 0.6667866840, 26.4390616120],
    [0.1187114557, 0.7513030740, 33.7220964968],
    [0.1806876544, 0.7605166210, 40.1754346277],
    [0.2468814759, 0.7280774491, 44.4596286807],
    [0.3134146740, 0.6752712787, 46.0975138048],
    [0.3807760902, 0.6143619697, 45.1993013221],
    [0.4438817320, 0.5539305365, 42.1270828351],
    [0.5048750234, 0.4939845730, 37.7055823771],
    [0.5594686939, 0.4398149385, 32.5549980957],
    [0.6055031065, 0.3939802163, 27.0386604779],
    [0.6431001553, 0.3565490644, 21.2415590312],
    [0.6712040394, 0.3285572333, 16.2749266395],
    [0.6922011989, 0.3076671340, 11.7110736629],
    [0.7070954918, 0.2928256820, 7.9094980098],
    [0.7174433632, 0.2825254008, 4.9969168320],
    [0.7243179657, 0.2756676438, 3.0343371892],
    [0.7287986223, 0.2712013777, 1.7024980296],
    [0.7314014095, 0.2685985905, 0.9200335296],
    [0.7328949435, 0.2671050565, 0.4717365346],
    [0.7339175433, 0.2660824567, 0.2287031230],
    [0.7345337109, 0.2654662891, 0.1062121808],
    [0.7346875786, 0.2653124214, 0.0538169895],
    [0.7346831881, 0.2653168119, 0.0267439442],
    [0.7346853483, 0.2653146517, 0.0122967558],
    [0.7346968079, 0.2653031921, 0.0063831575],
    [0.7347642336, 0.2652357664, 0.0030344076],
    [0.2378754454, 0.0345785689, 0.0014496675],
    [0.1808193607, 0.0081483232, 0.0013481029],
    [0.1741765271, 0.0051614234, 0.0041855079],
    [0.1728759557, 0.0048352007, 0.0144706463],
    [0.1701134714, 0.0061103423, 0.1448911703],
    [0.1674286605, 0.0083438862, 0.3729318258],
    [0.1636653023, 0.0116056129, 0.7930419260],
    [0.1586768432, 0.0161722463, 1.4588172026],
    [0.1527647943, 0.0231826069, 2.4371766756],
    [0.1451468785, 0.0357986676, 3.9267497128],
    [0.1349537015, 0.0579033529, 5.9734225995],
    [0.1190370211, 0.1028581692, 9.0874724588],
    [0.0964553904, 0.1931763169, 13.7977154333],
    [0.0745407936, 0.3516821164, 20.1690095377],
    [0.0750459623, 0.5467817633, 27.9639985110],
    [0.1085019770, 0.6877622106, 35.8639160096],
    [0.1625469314, 0.7371631183, 43.5177095703],
    [0.2234115379, 0.7303043648, 49.5906022844],
    [0.2870951935, 0.6927211362, 53.1376841295],
    [0.3516067490, 0.6390727649, 53.9831245502],
    [0.4136479621, 0.5822080756, 51.5519372327],
    [0.4730871186, 0.5249986952, 47.5011954506],
    [0.5279306533, 0.4710600114, 41.9701657524],
    [0.5755339688, 0.4238181177, 35.7167159268],
    [0.6151683699, 0.3843585137, 29.1271697766],
    [0.6489073700, 0.3507662213, 22.6275625501],
    [0.6742904902, 0.3254842310, 17.0851862785],
    [0.6938291650, 0.3060448434, 12.1740813851],
    [0.7079238504, 0.2919999460, 8.1586346632],
    [0.7178588972, 0.2821106794, 5.1228464878],
    [0.7245011732, 0.2754846979, 3.0885015485],
    [0.7288952817, 0.2711047183, 1.7302931685],
    [0.7314536077, 0.2685463923, 0.9347442568],
    [0.7329177396, 0.2670822604, 0.4778397763],
    [0.7339290763, 0.2660709237, 0.2321418367],
    [0.7345384767, 0.2654615233, 0.1079813489],
    [0.7346852723, 0.2653147277, 0.0545390831],
    [0.7346815312, 0.2653184688, 0.0270074830],
    [0.7346827366, 0.2653172634, 0.0124863992],
    [0.7347268630, 0.2652731370, 0.0064731213],
    [0.3061015319, 0.0662372427, 0.0032188355],
    [0.1897747397, 0.0123104837, 0.0020701965],
    [0.1748616063, 0.0054797025, 0.0044490466],
    [0.1730099770, 0.0048973990, 0.0146602897],
    [0.1718502985, 0.0050216603, 0.0498345080],
    [0.1674342120, 0.0083410786, 0.3731162537],
    [0.1636839927, 0.0115932759, 0.7936624550],
    [0.1587811592, 0.0160913020, 1.4619181463],
    [0.1531677351, 0.0228087186, 2.4476514575],
    [0.1467076234, 0.0339742811, 3.9621135746],
    [0.1389534290, 0.0518899222, 6.0685692256],
    [0.1277576779, 0.0851763966, 9.3156975422],
    [0.1114805032, 0.1493704597, 14.2184460626],
    [0.0941134620, 0.2609009703, 20.8378857580],
    [0.0873461691, 0.4242173097, 28.9528327658],
    [0.1053945215, 0.5875310105, 37.3888529085],
    [0.1497153390, 0.6887323439, 45.6595290831],
    [0.2053829086, 0.7142325366, 52.9328772271],
    [0.2647278852, 0.6974254793, 58.2686577333],
    [0.3264071859, 0.6567685542, 61.0232948749],
    [0.3852679431, 0.6067222182, 60.3357604608],
    [0.4435457145, 0.5528247639, 56.9260498482],
    [0.4969141322, 0.5013804765, 51.7657788259],
    [0.5448128708, 0.4542660962, 45.1318835835],
    [0.5858897064, 0.4135087529, 37.8052252255],
    [0.6215168953, 0.3780369441, 30.5131732955],
    [0.6522860412, 0.3474018567, 23.4378221890],
    [0.6760517079, 0.3237301393, 17.5481940007],
    [0.6947006582, 0.3051762273, 12.4232180385],
    [0.7083476910, 0.2915773723, 8.2845643190],
    [0.7180424808, 0.2819274336, 5.1770108472],
    [0.7245954770, 0.2753905250, 3.1162966874],
    [0.7289450875, 0.2710549125, 1.7450038957],
    [0.7314747104, 0.2685252896, 0.9408474985],
    [0.7329305144, 0.2670694856, 0.4812784900],
    [0.7339358698, 0.2660641302, 0.2339110047],
    [0.7345383093, 0.2654616907, 0.1087034424],
    [0.7346844458, 0.2653155542, 0.0548026219],
    [0.7346803587, 0.2653196413, 0.0271971264],
    [0.7346983092, 0.2653016908, 0.0125763630],
    [0.3963451920, 0.1081528403, 0.0066575492],
    [0.2105735231, 0.0219596786, 0.0038393645],
    [0.1767301621, 0.0063478097, 0.0051711402],
    [0.1731961141, 0.0049837838, 0.0149238285],
    [0.1718907961, 0.0050404072, 0.0500241515],
    [0.1701216418, 0.0061140481, 0.1449811341],
    [0.1636896494, 0.0115896797, 0.7938468830],
    [0.1588020006, 0.0160757942, 1.4625386753],
    [0.1532885103, 0.0227008608, 2.4507524012],
    [0.1471828667, 0.0334383017, 3.9725883565],
    [0.1407692159, 0.0492721686, 6.1039330874],
    [0.1323614788, 0.0764125543, 9.4108441682],
    [0.1210547222, 0.1243162098, 14.4466711459],
    [0.1084514265, 0.2051344737, 21.2586163873],
    [0.1013915878, 0.3263422810, 29.6217089861],
    [0.1093615214, 0.4752986915, 38.3776871634],
    [0.1410846529, 0.6065897027, 47.1844659821],
    [0.1911065616, 0.6768216298, 55.0746967398],
    [0.2469841537, 0.6864288407, 61.6109326759],
    [0.3049782125, 0.6631737143, 66.1542684787],
    [0.3609316076, 0.6244936937, 67.3759307855],
    [0.4158995862, 0.5770455731, 65.7098730763],
    [0.4680593983, 0.5286865603, 61.1906332235],
    [0.5144938877, 0.4839408988, 54.9274966571],
    [0.5557655053, 0.4433716099, 47.2203928822],
    [0.5927065827, 0.4067210314, 39.1912287444],
    [0.6252091885, 0.3743604189, 31.3234329345],
    [0.6542114178, 0.3454842156, 23.9008299112],
    [0.6769948841, 0.3227906411, 17.7973306540],
    [0.6951447732, 0.3047335245, 12.5491476943],
    [0.7085332705, 0.2913923268, 8.3387286783],
    [0.7181369036, 0.2818331815, 5.2048059861],
    [0.7246446394, 0.2753414309, 3.1310074146],
    [0.7289654627, 0.2710345373, 1.7511071374],
    [0.7314865750, 0.2685134250, 0.9442862122],
    [0.7329374997, 0.2670625003, 0.4830476580],
    [0.7339376506, 0.2660623494, 0.2346330983],
    [0.7345382488, 0.2654617512, 0.1089669812],
    [0.7346838558, 0.2653161442, 0.0549922653],
    [0.7346875442, 0.2653124558, 0.0272870902],
    [0.4883777921, 0.1509096511, 0.0127607909],
    [0.2467468192, 0.0387547580, 0.0072780782],
    [0.1812637084, 0.0084503373, 0.0069403082],
    [0.1737054962, 0.0052201840, 0.0156459221],
    [0.1719470640, 0.0050664545, 0.0502876902],
    [0.1701386430, 0.0061218612, 0.1451707775],
    [0.1674385636, 0.0083430260, 0.3732062175],
    [0.1588082508, 0.0160712579, 1.4627231033],
    [0.1533124684, 0.0226800877, 2.4513729302],
    [0.1473244134, 0.0332832924, 3.9756893002],
    [0.1413198984, 0.0485022069, 6.1144078692],
    [0.1344418389, 0.0726131524, 9.4462080300],
    [0.1261272850, 0.1118619016, 14.5418177720],
    [0.1178879152, 0.1723739105, 21.4868414707],
    [0.1128549354, 0.2623049847, 30.0424396154],
    [0.1169065747, 0.3781266444, 39.0465633837],
    [0.1380260441, 0.5076560753, 48.1733002369],
    [0.1787552165, 0.6094896633, 56.5996336388],
    [0.2318963543, 0.6571314434, 63.7527521887],
    [0.2875902427, 0.6558654731, 69.4965434213],
    [0.3402413652, 0.6319869310, 72.5069043893],
    [0.3923192873, 0.5947694288, 72.7500434010],
    [0.4410906506, 0.5525430092, 69.9744564516],
    [0.4862441516, 0.5107541189, 64.3523510546],
    [0.5259592607, 0.4725650392, 57.0160059557],
    [0.5629937132, 0.4361801823, 48.6063964011],
    [0.5966750760, 0.4027695805, 40.0014883833],
    [0.6273128707, 0.3722653793, 31.7864406566],
    [0.6552427268, 0.3444569421, 24.1499665646],
    [0.6774741822, 0.3223131650, 17.9232603098],
    [0.6953381564, 0.3045407410, 12.6033120536],
    [0.7086286687, 0.2912972000, 8.3665238172],
    [0.7181864167, 0.2817837579, 5.2195167133],
    [0.7246648740, 0.2753212244, 3.1371106563],
    [0.7289769317, 0.2710230683, 1.7545458511],
    [0.7314928951, 0.2685071049, 0.9460553802],
    [0.7329398657, 0.2670601343, 0.4837697516],
    [0.7339382978, 0.2660617022, 0.2348966370],
    [0.7345382054, 0.2654617946, 0.1091566246],
    [0.7346874097, 0.2653125903, 0.0550822291],
    [0.5859185892, 0.1962194915, 0.0274715181],
    [0.2999881396, 0.0634785671, 0.0133813199],
    [0.1898618904, 0.0124408910, 0.0103790219],
    [0.1749517575, 0.0057975529, 0.0174150901],
    [0.1721011801, 0.0051377971, 0.0510097838],
    [0.1701622671, 0.0061327179, 0.1454343163],
    [0.1674476189, 0.0083471322, 0.3733958609],
    [0.1636925100, 0.0115909353, 0.7939368468],
    [0.1533196161, 0.0226739996, 2.4515573581],
    [0.1473523656, 0.0332533432, 3.9763098292],
    [0.1414832463, 0.0482792254, 6.1175088129],
    [0.1350710832, 0.0714941855, 9.4566828118],
    [0.1284192966, 0.1064578881, 14.5771816338],
    [0.1229665226, 0.1558925948, 21.5819880967],
    [0.1208497816, 0.2233133740, 30.2706646988],
    [0.1243399100, 0.3107004546, 39.4672940130],
    [0.1391642090, 0.4159881999, 48.8421764572],
    [0.1702559192, 0.5236691490, 57.5884678937],
    [0.2170059720, 0.6015923509, 65.2776890876],
    [0.2720579183, 0.6327215246, 71.6383629341],
    [0.3231963704, 0.6271843909, 75.8491793319],
    [0.3722780987, 0.6029997083, 77.8810170048],
    [0.4181645314, 0.5701231862, 77.0146267763],
    [0.4598475497, 0.5342514553, 73.1361742827],
    [0.4981510160, 0.4990055283, 66.4408603533],
    [0.5335440121, 0.4650369982, 58.4020094746],
    [0.5672072201, 0.4319880302, 49.4166560400],
    [0.5989372793, 0.4005168023, 40.4644961055],
    [0.6284402386, 0.3711425535, 32.0355773100],
    [0.6557659190, 0.3439357600, 24.2758962204],
    [0.6776821399, 0.3221059843, 17.9774246691],
    [0.6954375157, 0.3044416875, 12.6311071925],
    [0.7086788588, 0.2912471528, 8.3812345444],
    [0.7182068584, 0.2817633532, 5.2256199550],
    [0.7246762692, 0.2753098449, 3.1405493700],
    [0.7289829516, 0.2710170484, 1.7563150191],
    [0.7314952249, 0.2685047751, 0.9467774738],
    [0.7329407274, 0.2670592726, 0.4840332904],
    [0.7339387627, 0.2660612373, 0.2350862805],
    [0.7345401192, 0.2654598808, 0.1092465884],
    [0.6495934763, 0.2257922713, 0.0552666570],
    [0.3905111623, 0.1055118285, 0.0280920471],
    [0.2044801546, 0.0192264769, 0.0164822636],
    [0.1773565956, 0.0069124879, 0.0208538038],
    [0.1724790669, 0.0053124210, 0.0527789518],
    [0.1702269867, 0.0061624606, 0.1461564099],
    [0.1674602022, 0.0083528382, 0.3736593997],
    [0.1636984628, 0.0115935831, 0.7941264902],
    [0.1588104219, 0.0160721860, 1.4628130670],
    [0.1473606779, 0.0332445557, 3.9764942571],
    [0.1415154121, 0.0482360653, 6.1181293419],
    [0.1352571944, 0.0711697929, 9.4597837555],
    [0.1291120928, 0.1048629366, 14.5876564156],
    [0.1252761112, 0.1487031380, 21.6173519585],
    [0.1252842464, 0.2033316626, 30.3658113248],
    [0.1300293780, 0.2681282570, 39.6955190963],
    [0.1421060010, 0.3489466327, 49.2629070865],
    [0.1657865643, 0.4397115060, 58.2573441140],
    [0.2043559430, 0.5275354805, 66.2665233425],
    [0.2554018735, 0.5866485890, 73.1632998331],
    [0.3074616366, 0.6083683178, 77.9909988447],
    [0.3555806692, 0.6000383405, 81.2232919474],
    [0.3986807613, 0.5788008028, 82.1456003801],
    [0.4374492331, 0.5516539633, 80.1763446075],
    [0.4721639958, 0.5222252521, 75.2246835814],
    [0.5060430275, 0.4912139651, 67.8268638722],
    [0.5379711986, 0.4606424550, 59.2122691136],
    [0.5696108307, 0.4295963038, 49.8796637622],
    [0.6001503760, 0.3993086829, 40.7136327588],
    [0.6290116205, 0.3705734425, 32.1615069658],
    [0.6559924226, 0.3437101158, 24.3300605797],
    [0.6777889424, 0.3219995787, 18.0052198080],
    [0.6954898857, 0.3043894787, 12.6458179197],
    [0.7086996160, 0.2912264547, 8.3873377861],
    [0.7182183727, 0.2817518598, 5.2290586687],
    [0.7246822009, 0.2753039214, 3.1423185380],
    [0.7289852717, 0.2710147283, 1.7570371127],
    [0.7314960743, 0.2685039257, 0.9470410126],
    [0.7329413469, 0.2670586531, 0.4842229338],
    [0.7339398855, 0.2660601145, 0.2351762442],
    [0.6881324193, 0.2438888131, 0.1094310164],
    [0.4876978687, 0.1506355947, 0.0558871860],
    [0.2366882463, 0.0341760871, 0.0311929908],
    [0.1815737474, 0.0088679372, 0.0269570455],
    [0.1732115820, 0.0056511693, 0.0562176655],
    [0.1703857640, 0.0062353008, 0.1479255779],
    [0.1674946773, 0.0083684712, 0.3743814933],
    [0.1637067350, 0.0115972624, 0.7943900290],
    [0.1588149402, 0.0160741435, 1.4630027105],
    [0.1533214611, 0.0226747600, 2.4516473219],
    [0.1415249581, 0.0482233930, 6.1183137699],
    [0.1352937671, 0.0711069264, 9.4604042845],
    [0.1293166600, 0.1044000681, 14.5907573593],
    [0.1259757564, 0.1465745821, 21.6278267404],
    [0.1273299450, 0.1945396035, 30.4011751866],
    [0.1333393555, 0.2458708515, 39.7906657224],
    [0.1449967346, 0.3051316883, 49.4911321699],
    [0.1643956616, 0.3755311098, 58.6780747432],
    [0.1951748227, 0.4518567193, 66.9353995628],
    [0.2395658678, 0.5228567489, 74.1521340879],
    [0.2896786216, 0.5692377548, 79.5159357436],
    [0.3397889357, 0.5845076504, 83.3651114602],
    [0.3823161065, 0.5771087514, 85.4878753227],
    [0.4184115565, 0.5605769670, 85.3073182113],
    [0.4501341907, 0.5394774809, 82.2648539061],
    [0.4803391724, 0.5142348150, 76.6106871003],
    [0.5106546156, 0.4866598885, 68.6371235111],
    [0.5404985659, 0.4581333368, 59.6752768358],
    [0.5709005789, 0.4283128531, 50.1288004156],
    [0.6007649557, 0.3986965977, 40.8395624146],
    [0.6292586451, 0.3703273905, 32.2156713251],
    [0.6561087184, 0.3435942596, 24.3578557186],
    [0.6778452957, 0.3219434349, 18.0199305352],
    [0.6955115656, 0.3043678656, 12.6519211614],
    [0.7087113093, 0.2912147946, 8.3907764998],
    [0.7182243401, 0.2817459031, 5.2308278367],
    [0.7246845430, 0.2753015825, 3.1430406316],
    [0.7289861180, 0.2710138820, 1.7573006515],
    [0.7314966852, 0.2685033148, 0.9472306560],
    [0.7329420823, 0.2670579177, 0.4843128976],
    [0.7113571026, 0.2555277957, 0.2353606722],
    [0.5751977148, 0.1914160669, 0.1100515454],
    [0.2879642778, 0.0579748671, 0.0589881297],
    [0.1914813619, 0.0134617241, 0.0416677727],
    [0.1745068197, 0.0062502334, 0.0623209073],
    [0.1706938996, 0.0063767643, 0.1513642916],
    [0.1675792710, 0.0084067633, 0.3761506613],
    [0.1637293994, 0.0116073433, 0.7951121225],
    [0.1588212190, 0.0160768637, 1.4632662492],
    [0.1533253007, 0.0226763641, 2.4518369653],
    [0.1473623627, 0.0332452128, 3.9765842209],
    [0.1353046049, 0.0710884599, 9.4605887125],
    [0.1293568056, 0.1043102862, 14.5913778883],
    [0.1261823499, 0.1459561345, 21.6309276841],
    [0.1279531731, 0.1919261150, 30.4116499685],
    [0.1349027864, 0.2359826407, 39.8260295842],
    [0.1468678573, 0.2817644661, 49.5862787959],
    [0.1643975700, 0.3322905137, 58.9062998266],
    [0.1898477870, 0.3918383114, 67.3561301921],
    [0.2264654410, 0.4552819035, 74.8210103082],
    [0.2716152498, 0.5134378222, 80.5047699985],
    [0.3212602306, 0.5508194131, 84.8900483592],
    [0.3665726371, 0.5639255682, 87.6296948355],
    [0.4023330553, 0.5597086987, 88.6495931539],
    [0.4314065194, 0.5485226655, 87.3958275099],
    [0.4585612882, 0.5313749401, 83.6508574250],
    [0.4851201877, 0.5095594032, 77.4209467392],
    [0.5132888850, 0.4840578756, 69.1001312333],
    [0.5418554973, 0.4567860997, 59.9244134891],
    [0.5715538856, 0.4276627084, 50.2547300714],
    [0.6010304502, 0.3984321730, 40.8937267740],
    [0.6293854586, 0.3702010750, 32.2434664640],
    [0.6561701205, 0.3435330896, 24.3725664458],
    [0.6778686379, 0.3219201795, 18.0260337769],
    [0.6955237792, 0.3043556895, 12.6553598751],
    [0.7087173544, 0.2912087666, 8.3925456678],
    [0.7182267260, 0.2817435215, 5.2315499303],
    [0.7246853976, 0.2753007292, 3.1433041704],
    [0.7289867268, 0.2710132732, 1.7574902949],
    [0.7314972032, 0.2685027968, 0.9473206198],
    [0.7217226727, 0.2617959544, 0.4844973255],
    [0.6465612328, 0.2253195208, 0.2359812012],
    [0.3624992599, 0.0926414692, 0.1131524891],
    [0.2092649621, 0.0217068800, 0.0694629116],
    [0.1776045006, 0.0076828671, 0.0770316345],
    [0.1712398918, 0.0066274629, 0.1574675333],
    [0.1677435041, 0.0084811599, 0.3795893750],
    [0.1637850161, 0.0116320374, 0.7968812906],
    [0.1588384221, 0.0160843167, 1.4639883428],
    [0.1533306365, 0.0226785933, 2.4521005041],
    [0.1473658691, 0.0332465998, 3.9767738643],
    [0.1415265621, 0.0482239721, 6.1184037336],
    [0.1293686901, 0.1042839054, 14.5915623163],
    [0.1262228779, 0.1458360950, 21.6315482131],
    [0.1281375783, 0.1911657623, 30.4147509122],
    [0.1353837791, 0.2330310508, 39.8365043660],
    [0.1477977227, 0.2712810466, 49.6216426577],
    [0.1647208859, 0.3088072557, 59.0014464527],
    [0.1870763278, 0.3503274082, 67.5843552755],
    [0.2176443205, 0.4000015955, 75.2417409375],
    [0.2555839749, 0.4526889656, 81.1736462188],
    [0.3015635443, 0.5015614602, 85.8788826140],
    [0.3476172145, 0.5342319834, 89.1546317344],
    [0.3866867167, 0.5481043084, 90.7914126666],
    [0.4155353623, 0.5481439375, 90.7381024525],
    [0.4400452028, 0.5404858325, 88.7818310288],
    [0.4634921377, 0.5266296448, 84.4611170640],
    [0.4878525314, 0.5068864316, 77.8839544614],
    [0.5147038608, 0.4826600658, 69.3492678867],
    [0.5425428059, 0.4561036651, 60.0503431449],
    [0.5718359784, 0.4273819727, 50.3088944307],
    [0.6011667379, 0.3982964333, 40.9215219129],
    [0.6294524439, 0.3701343527, 32.2581771912],
    [0.6561955628, 0.3435077435, 24.3786696875],
    [0.6778817882, 0.3219070780, 18.0294724906],
    [0.6955300840, 0.3043494040, 12.6571290431],
    [0.7087197887, 0.2912063393, 8.3932677614],
    [0.7182275967, 0.2817426524, 5.2318134691],
    [0.7246860124, 0.2753001153, 3.1434938138],
    [0.7289871409, 0.2710128591, 1.7575802587],
    [0.7256885388, 0.2657563825, 0.9475050477],
    [0.6867334840, 0.2453920784, 0.4851178545],
    [0.4659454285, 0.1411524677, 0.2390821449],
    [0.2407241231, 0.0363185998, 0.1236272709],
    [0.1833651363, 0.0103469447, 0.1048267734],
    [0.1725516444, 0.0072297341, 0.1721782605],
    [0.1680347194, 0.0086130979, 0.3856926167],
    [0.1638930091, 0.0116800223, 0.8003200043],
    [0.1588806384, 0.0161025736, 1.4657575108],
    [0.1533452559, 0.0226847011, 2.4528225977],
    [0.1473707417, 0.0332485271, 3.9770374031],
    [0.1415299007, 0.0482251953, 6.1185933771],
    [0.1353061501, 0.0710889533, 9.4606786763],
    [0.1262348708, 0.1458008163, 21.6317326410],
    [0.1281737818, 0.1910180963, 30.4153714412],
    [0.1355267633, 0.2321712030, 39.8396053097],
    [0.1480898987, 0.2681388645, 49.6321174396],
    [0.1649549612, 0.2981754805, 59.0368103144],
    [0.1858623309, 0.3274182405, 67.6795019015],
    [0.2122936810, 0.3608870141, 75.4699660209],
    [0.2440059282, 0.4017882979, 81.5943768481],
    [0.2832451564, 0.4467168272, 86.5477588343],
    [0.3268367326, 0.4899344894, 90.1434659893],
    [0.3675237032, 0.5211559597, 92.3163495656],
    [0.3999818316, 0.5375057827, 92.8799219653],
    [0.4243187986, 0.5404107189, 92.1241059714],
    [0.4451018046, 0.5357735139, 89.5920906678],
    [0.4663109372, 0.5239153374, 84.9241247862],
    [0.4893206982, 0.5054499026, 78.1330911148],
    [0.5154205722, 0.4819519927, 69.4751975425],
    [0.5428394947, 0.4558090694, 60.1045075042],
    [0.5719807846, 0.4272378619, 50.3366895696],
    [0.6012387492, 0.3982247115, 40.9362326401],
    [0.6294802063, 0.3701066994, 32.2642804329],
    [0.6562098964, 0.3434934641, 24.3821084012],
    [0.6778885704, 0.3219003210, 18.0312416587],
    [0.6955326334, 0.3043468625, 12.6578511367],
    [0.7087206770, 0.2912054535, 8.3935313002],
    [0.7182282231, 0.2817420271, 5.2320031125],
    [0.7246863763, 0.2752997518, 3.1435837776],
    [0.7258262637, 0.2694972947, 1.7577646867],
    [0.7068154379, 0.2568363106, 0.9481255767],
    [0.5602192149, 0.1861031329, 0.4882187982],
    [0.3007652407, 0.0643793563, 0.2495569267],
    [0.1942375472, 0.0153835998, 0.1589911327],
    [0.1750136533, 0.0083600710, 0.1999733994],
    [0.1687354517, 0.0089305531, 0.4004033439],
    [0.1640845538, 0.0117651447, 0.8064232460],
    [0.1589626172, 0.0161380528, 1.4691962245],
    [0.1533811324, 0.0226996624, 2.4545917657],
    [0.1473840922, 0.0332538077, 3.9777594967],
    [0.1415345401, 0.0482268952, 6.1188569158],
    [0.1353093663, 0.0710899967, 9.4608683197],
    [0.1293701743, 0.1042842936, 14.5916522800],
    [0.1281844988, 0.1909746914, 30.4155558691],
    [0.1355549005, 0.2320041359, 39.8402258387],
    [0.1481777685, 0.2672223266, 49.6352183833],
    [0.1650380611, 0.2949767357, 59.0472850963],
    [0.1853933645, 0.3169612017, 67.7148657633],
    [0.2096080513, 0.3389901593, 75.5651126469],
    [0.2365401588, 0.3651197996, 81.8226019314],
    [0.2694129682, 0.3998449707, 86.9684894636],
    [0.3068949968, 0.4397485796, 90.8123422096],
    [0.3460870332, 0.4803484755, 93.3051838205],
    [0.3807334602, 0.5122641001, 94.4048588643],
    [0.4088381725, 0.5303837929, 94.2659254842],
    [0.4294625554, 0.5358683500, 92.9343656104],
    [0.4479931378, 0.5330762915, 90.0550983900],
    [0.4678258974, 0.5224561084, 85.1732614395],
    [0.4900643585, 0.5047221741, 78.2590207706],
    [0.5157298960, 0.4816463805, 69.5293619018],
    [0.5429917942, 0.4556578427, 60.1323026431],
    [0.5720573131, 0.4271617010, 50.3514002968],
    [0.6012685993, 0.3981949815, 40.9423358818],
    [0.6294958472, 0.3700911199, 32.2677191466],
    [0.6562172847, 0.3434861037, 24.3838775692],
    [0.6778913197, 0.3218975819, 18.0319637522],
    [0.6955335638, 0.3043459351, 12.6581146755],
    [0.7087213162, 0.2912048162, 8.3937209436],
    [0.7182285658, 0.2817416850, 5.2320930763],
    [0.7229006923, 0.2744229675, 3.1437682055],
    [0.7153446238, 0.2644735188, 1.7583852157],
    [0.6273144870, 0.2192764403, 0.9512265204],
    [0.3841757026, 0.1037660577, 0.4986935801],
    [0.2178045290, 0.0263632705, 0.2849207885],
    [0.1797421669, 0.0105346510, 0.2541377588],
    [0.1700547934, 0.0095282289, 0.4281984828],
    [0.1645457350, 0.0119700811, 0.8211339732],
    [0.1591080401, 0.0162009991, 1.4752994663],
    [0.1534508025, 0.0227287387, 2.4580304794],
    [0.1474168547, 0.0332667424, 3.9795286647],
    [0.1415472517, 0.0482315525, 6.1195790094],
    [0.1353138358, 0.0710914467, 9.4611318585],
    [0.1293732637, 0.1042851166, 14.5918419235],
    [0.1262362778, 0.1458010867, 21.6318226048],
    [0.1355632412, 0.2319550223, 39.8404102667],
    [0.1481951714, 0.2670441710, 49.6358389123],
    [0.1650647759, 0.2940426165, 59.0503860400],
    [0.1852637496, 0.3138043472, 67.7253405451],
    [0.2084560772, 0.3289214650, 75.6004765087],
    [0.2326181599, 0.3443559521, 81.9177485575],
    [0.2601597929, 0.3655656640, 87.1967145470],
    [0.2913891471, 0.3961947006, 91.2330728389],
    [0.3250887859, 0.4335324502, 93.9740600408],
    [0.3589359557, 0.4736610212, 95.3936931191],
    [0.3895538147, 0.5062327427, 95.7908623831],
    [0.4140285757, 0.5261880559, 95.0761851231],
    [0.4324045204, 0.5332657962, 93.3973733326],
    [0.4495473432, 0.5316256847, 90.3042350433],
    [0.4685932570, 0.5217168265, 85.2991910953],
    [0.4903852706, 0.5044081097, 78.3131851299],
    [0.5158886831, 0.4814894960, 69.5571570407],
    [0.5430722953, 0.4555779088, 60.1470133703],
    [0.5720890392, 0.4271301273, 50.3575035385],
    [0.6012854166, 0.3981782319, 40.9457745955],
    [0.6295039063, 0.3700830924, 32.2694883146],
    [0.6562202844, 0.3434831153, 24.3845996628],
    [0.6778923231, 0.3218965823, 18.0322272910],
    [0.6955342332, 0.3043452677, 12.6583043189],
    [0.7087216497, 0.2912044835, 8.3938109074],
    [0.7171420946, 0.2811890251, 5.2322775042],
    [0.7169156998, 0.2714854313, 3.1443887345],
    [0.6673135858, 0.2414617716, 1.7614861594],
    [0.4751051314, 0.1474869008, 0.9617013023],
    [0.2585289059, 0.0455017244, 0.5340574418],
    [0.1903757412, 0.0154521757, 0.3800674146],
    [0.1726040147, 0.0106850032, 0.4823628421],
    [0.1654151233, 0.0123563942, 0.8489291121],
    [0.1594582732, 0.0163525884, 1.4900101935],
    [0.1535743987, 0.0227803285, 2.4641337211],
    [0.1474804791, 0.0332918811, 3.9829673784],
    [0.1415784463, 0.0482429595, 6.1213481774],
    [0.1353260816, 0.0710954196, 9.4618539520],
    [0.1293775567, 0.1042862602, 14.5921054622],
    [0.1262392064, 0.1458016629, 21.6320122482],
    [0.1281858053, 0.1909748463, 30.4156458329],
    [0.1482003511, 0.2669917923, 49.6360233402],
    [0.1650702641, 0.2938609789, 59.0510065690],
    [0.1852281306, 0.3128815095, 67.7284414888],
    [0.2081185749, 0.3258725959, 75.6109512906],
    [0.2308851985, 0.3347512021, 81.9531124193],
    [0.2551712527, 0.3459647401, 87.2918611730],
    [0.2807678693, 0.3639624045, 91.4612979223],
    [0.3084464543, 0.3924494597, 94.3947906700],
    [0.3373161870, 0.4290128278, 96.0625693394],
    [0.3675462004, 0.4690527666, 96.7796966380],
    [0.3947305848, 0.5026595020, 96.6011220221],
    [0.4169985130, 0.5237801007, 95.5391928453],
    [0.4339862331, 0.5318653309, 93.6465099859],
    [0.4503345815, 0.5308906581, 90.4301646991],
    [0.4689243637, 0.5213977907, 85.3533554546],
    [0.4905500079, 0.5042468833, 78.3409802688],
    [0.5159726227, 0.4814065624, 69.5718677679],
    [0.5431056709, 0.4555447683, 60.1531166121],
    [0.5721069135, 0.4271123387, 50.3609422522],
    [0.6012940799, 0.3981696034, 40.9475437635],
    [0.6295071817, 0.3700798298, 32.2702104082],
    [0.6562213791, 0.3434820247, 24.3848632016],
    [0.6778930451, 0.3218958630, 18.0324169344],
    [0.6955345728, 0.3043449291, 12.6583942827],
    [0.7080334177, 0.2908359901, 8.3939953354],
    [0.7134807062, 0.2793273130, 5.2328980332],
    [0.6881793253, 0.2573868944, 3.1474896782],
    [0.5533829945, 0.1869619198, 1.7719609412],
    [0.3186217944, 0.0741217161, 0.9970651640],
    [0.2101000878, 0.0246495750, 0.6292040679],
    [0.1784115724, 0.0133349823, 0.6082924979],
    [0.1670989440, 0.0131058706, 0.9030934714],
    [0.1601188902, 0.0166385046, 1.5178053324],
    [0.1538721053, 0.0229045853, 2.4788444483],
    [0.1475933536, 0.0333364859, 3.9890706201],
    [0.1416390265, 0.0482651301, 6.1247868911],
    [0.1353561331, 0.0711051484, 9.4636231201],
    [0.1293893193, 0.1042893936, 14.5928275558],
    [0.1262432761, 0.1458024637, 21.6322757870],
    [0.1281885248, 0.1909751805, 30.4158354763],
    [0.1355644380, 0.2319550844, 39.8405002305],
    [0.1650719356, 0.2938075721, 59.0511909969],
    [0.1852214702, 0.3127020112, 67.7290620178],
    [0.2080219358, 0.3249805036, 75.6140522342],
    [0.2303699675, 0.3318356578, 81.9635872011],
    [0.2529317583, 0.3368514999, 87.3272250348],
    [0.2749476263, 0.3453889657, 91.5564445483],
    [0.2968707270, 0.3617818229, 94.6230157534],
    [0.3199812432, 0.3895497508, 96.4832999687],
    [0.3455452601, 0.4258205559, 97.4485728583],
    [0.3726107727, 0.4662969272, 97.5899562770],
    [0.3976951604, 0.5006023249, 97.0641297443],
    [0.4185956974, 0.5224831989, 95.7883294987],
    [0.4347874284, 0.5311555076, 93.7724396417],
    [0.4506742419, 0.5305734477, 90.4843290584],
    [0.4690943351, 0.5212340088, 85.3811505935],
    [0.4906371000, 0.5041616474, 78.3556909960],
    [0.5160074259, 0.4813721762, 69.5779710096],
    [0.5431244748, 0.4555260968, 60.1565553258],
    [0.5721161200, 0.4271031765, 50.3627114202],
    [0.6012976031, 0.3981660943, 40.9482658571],
    [0.6295083771, 0.3700786391, 32.2704739470],
    [0.6562221669, 0.3434812400, 24.3850528450],
    [0.6778934048, 0.3218955046, 18.0325068982],
    [0.6950691923, 0.3040777251, 12.6585787106],
    [0.7057068467, 0.2895908123, 8.3946158644],
    [0.6954632253, 0.2701698458, 5.2359989769],
    [0.6100917138, 0.2191327135, 3.1579644601],
    [0.3920350229, 0.1101436502, 1.8073248030],
    [0.2428229823, 0.0400949877, 1.0922117901],
    [0.1894674293, 0.0184211582, 0.8574291513],
    [0.1709548105, 0.0148317103, 1.0290231272],
    [0.1613997895, 0.0171938296, 1.5719696917],
    [0.1544338018, 0.0231390141, 2.5066395872],
    [0.1478652537, 0.0334439265, 4.0037813473],
    [0.1417465023, 0.0483044695, 6.1308901329],
    [0.1354144940, 0.0711240588, 9.4670618338],
    [0.1294181851, 0.1042970643, 14.5945967238],
    [0.1262544268, 0.1458046577, 21.6329978806],
    [0.1281923038, 0.1909756449, 30.4160990151],
    [0.1355669289, 0.2319552239, 39.8406898739],
    [0.1482014336, 0.2669917852, 49.6361133040],
    [0.1852195648, 0.3126492297, 67.7292464458],
    [0.2080033785, 0.3248069397, 75.6146727633],
    [0.2302210858, 0.3309819413, 81.9666881448],
    [0.2522609031, 0.3340793219, 87.3376998167],
    [0.2723093301, 0.3367181557, 91.5918084101],
    [0.2904608045, 0.3440092904, 94.7181623795],
    [0.3078112689, 0.3599252122, 96.7115250521],
    [0.3277747476, 0.3874284970, 97.8693034876],
    [0.3503984921, 0.4238839314, 98.2588324973],
    [0.3755147437, 0.4647020273, 98.0529639992],
    [0.3992902418, 0.4994925103, 97.3132663976],
    [0.4194047965, 0.5218255286, 95.9142591545],
    [0.4351330973, 0.5308491322, 93.8266040010],
    [0.4508486049, 0.5304105972, 90.5121241973],
    [0.4691841994, 0.5211474171, 85.3958613207],
    [0.4906732120, 0.5041263051, 78.3617942377],
    [0.5160270343, 0.4813528028, 69.5814097233],
    [0.5431341591, 0.4555164807, 60.1583244938],
    [0.5721198658, 0.4270994487, 50.3634335138],
    [0.6012988889, 0.3981648136, 40.9485293959],
    [0.6295092373, 0.3700777823, 32.2706635904],
    [0.6562225551, 0.3434808532, 24.3851428088],
    [0.6775594931, 0.3216854387, 18.0326913262],
    [0.6934932221, 0.3031732564, 12.6591992396],
    [0.6940932726, 0.2833780707, 8.3977168081],
    [0.6425375886, 0.2433095228, 5.2464737588],
    [0.4676245443, 0.1496241239, 3.1933283219],
    [0.2901367260, 0.0630005913, 1.9024714290],
    [0.2086708890, 0.0273605940, 1.3204368735],
    [0.1783725307, 0.0181790408, 1.2781597805],
    [0.1643401115, 0.0184757571, 1.6978993475],
    [0.1555234867, 0.0235945946, 2.5608039466],
    [0.1483783326, 0.0336466575, 4.0315764862],
    [0.1420054072, 0.0483992306, 6.1456008601],
    [0.1355180339, 0.0711576144, 9.4731650755],
    [0.1294742436, 0.1043119764, 14.5980354375],
    [0.1262817909, 0.1458100252, 21.6347670486],
    [0.1282026581, 0.1909769174, 30.4168211087],
    [0.1355703904, 0.2319554177, 39.8409534127],
    [0.1482036864, 0.2669917795, 49.6363029474],
    [0.1650729082, 0.2938075200, 59.0512809607],
    [0.2079979702, 0.3247559002, 75.6148571912],
    [0.2301923395, 0.3308158091, 81.9673086738],
    [0.2520662184, 0.3332670689, 87.3408007604],
    [0.2715154700, 0.3340761242, 91.6022831919],
    [0.2875374199, 0.3356873433, 94.7535262412],
    [0.3010295939, 0.3426932537, 96.8066716781],
    [0.3152255133, 0.3585010336, 98.0975285710],
    [0.3323823251, 0.3861161612, 98.6795631265],
    [0.3531855234, 0.4227542520, 98.7218402195],
    [0.3770783596, 0.4638392659, 98.3021006525],
    [0.4000984289, 0.4989291479, 97.4391960534],
    [0.4197538729, 0.5215415826, 95.9684235138],
    [0.4353105464, 0.5306918344, 93.8543991399],
    [0.4509407949, 0.5303244943, 90.5268349245],
    [0.4692214619, 0.5211115116, 85.4019645625],
    [0.4906935577, 0.5041063930, 78.3652329514],
    [0.5160371321, 0.4813428259, 69.5831788913],
    [0.5431381004, 0.4555125672, 60.1590465873],
    [0.5721212328, 0.4270980882, 50.3636970526],
    [0.6012998142, 0.3981638921, 40.9487190393],
    [0.6295096581, 0.3700773631, 32.2707535542],
    [0.6559703724, 0.3433037813, 24.3853272367],
    [0.6764275661, 0.3209736682, 18.0333118552],
    [0.6855628497, 0.2986241686, 12.6623001833],
    [0.6583184495, 0.2642682210, 8.4081915899],
    [0.5279360053, 0.1853660025, 5.2818376205],
    [0.3503673839, 0.0936055009, 3.2884749479],
    [0.2385386513, 0.0416008636, 2.1306965124],
    [0.1915041362, 0.0241747650, 1.7411675027],
    [0.1700246390, 0.0209745813, 1.9470360008],
    [0.1580278271, 0.0246476014, 2.6867336024],
    [0.1493739773, 0.0340407671, 4.0857408455],
    [0.1424940015, 0.0485780494, 6.1733959990],
    [0.1357674646, 0.0712384450, 9.4878758027],
    [0.1295737003, 0.1043384382, 14.6041386793],
    [0.1263349336, 0.1458204628, 21.6382057623],
    [0.1282280679, 0.1909800254, 30.4185902767],
    [0.1355798747, 0.2319559486, 39.8416755062],
    [0.1482068169, 0.2669917714, 49.6365664862],
    [0.1650749320, 0.2938074193, 59.0514706041],
    [0.1852204353, 0.3126491516, 67.7293364096],
    [0.2301839312, 0.3307669529, 81.9674931018],
    [0.2520285361, 0.3331089778, 87.3414212894],
    [0.2712845399, 0.3333016120, 91.6053841356],
    [0.2866553330, 0.3331484619, 94.7640010231],
    [0.2979253421, 0.3346084653, 96.8420355399],
    [0.3082045504, 0.3416331829, 98.1926751970],
    [0.3196170957, 0.3575976999, 98.9077882099],
    [0.3350320039, 0.3853425225, 99.1425708487],
    [0.3546874898, 0.4221406806, 98.9709768728],
    [0.3778708540, 0.4634005696, 98.4280303083],
    [0.4004471250, 0.4986857750, 97.4933604128],
    [0.4199330749, 0.5213957844, 95.9962186527],
    [0.4354043714, 0.5306086647, 93.8691098671],
    [0.4509790226, 0.5302887909, 90.5329381662],
    [0.4692424559, 0.5210912821, 85.4054032762],
    [0.4907040347, 0.5040961391, 78.3670021194],
    [0.5160412426, 0.4813387647, 69.5839009849],
    [0.5431395388, 0.4555111389, 60.1593101261],
    [0.5721222165, 0.4270971092, 50.3638866960],
    [0.6013002648, 0.3981634433, 40.9488090031],
    [0.6293157000, 0.3699218578, 32.2709379822],
    [0.6551149501, 0.3427034428, 24.3859477658],
    [0.6707046304, 0.3173769802, 18.0364127989],
    [0.6604505252, 0.2842404990, 12.6727749652],
    [0.5712211470, 0.2179093112, 8.4435554517],
    [0.4108436454, 0.1271666346, 5.3769842466],
    [0.2807557321, 0.0626291812, 3.5167000313],
    [0.2125829872, 0.0340275382, 2.5514271417],
    [0.1801798769, 0.0254915068, 2.4100437230],
    [0.1628811578, 0.0267053945, 2.9358702557],
    [0.1516635948, 0.0349524001, 4.2116705013],
    [0.1434422771, 0.0489257556, 6.2275603583],
    [0.1362382071, 0.0713909846, 9.5156709416],
    [0.1298133011, 0.1044021820, 14.6188494065],
    [0.1264292186, 0.1458389857, 21.6443090040],
    [0.1282774158, 0.1909860732, 30.4220289904],
    [0.1356031497, 0.2319572389, 39.8434446742],
    [0.1482153945, 0.2669917494, 49.6372885798],
    [0.1650777444, 0.2938072795, 59.0517341429],
    [0.1852222465, 0.3126489961, 67.7295260530],
    [0.2079987467, 0.3247558098, 75.6149471550],
    [0.2520174966, 0.3330624846, 87.3416057173],
    [0.2712397840, 0.3331508458, 91.6060046646],
    [0.2863983783, 0.3324039097, 94.7671019668],
    [0.2969871381, 0.3321399272, 96.8525103218],
    [0.3049833787, 0.3337088624, 98.2280390588],
    [0.3124590926, 0.3409445186, 99.0029348360],
    [0.3221452951, 0.3570581968, 99.3707959321],
    [0.3364610971, 0.3849201039, 99.3917075021],
    [0.3554490422, 0.4218278840, 99.0969065286],
    [0.3782128126, 0.4632108569, 98.4821946676],
    [0.4006261397, 0.4985607835, 97.5211555517],
    [0.4200278301, 0.5213186923, 96.0109293799],
    [0.4354432777, 0.5305741770, 93.8752131089],
    [0.4510005605, 0.5302686750, 90.5363768799],
    [0.4692532664, 0.5210808651, 85.4071724442],
    [0.4907083003, 0.5040919646, 78.3677242130],
    [0.5160427427, 0.4813372825, 69.5841645237],
    [0.5431405739, 0.4555101111, 60.1594997695],
    [0.5721226940, 0.4270966340, 50.3639766598],
    [0.6011459878, 0.3980214410, 40.9489934310],
    [0.6286574742, 0.3693944180, 32.2715585112],
    [0.6507773908, 0.3396611906, 24.3890487094],
    [0.6522813797, 0.3058163050, 18.0468875807],
    [0.5946527681, 0.2466841441, 12.7081388270],
    [0.4656217099, 0.1625276989, 8.5387020777],
    [0.3290151703, 0.0885458441, 5.6052093300],
    [0.2438486739, 0.0492703668, 3.9374306606],
    [0.1967337621, 0.0330287265, 3.2203033620],
    [0.1715901073, 0.0304422234, 3.3988779779],
    [0.1561063444, 0.0367365616, 4.4608071547],
    [0.1456236992, 0.0497305399, 6.3534900141],
    [0.1371519437, 0.0716876732, 9.5698353009],
    [0.1302655185, 0.1045224824, 14.6466445454],
    [0.1266563674, 0.1458836062, 21.6590197312],
    [0.1283649695, 0.1909968077, 30.4281322321],
    [0.1356483520, 0.2319597551, 39.8468833879],
    [0.1482364448, 0.2669916842, 49.6390577478],
    [0.1650854503, 0.2938068962, 59.0524562365],
    [0.1852247635, 0.3126487800, 67.7297895918],
    [0.2080003620, 0.3247556279, 75.6151367984],
    [0.2301846302, 0.3307668596, 81.9675830656],
    [0.2712266614, 0.3331065055, 91.6061890926],
    [0.2863485419, 0.3322589610, 94.7677224958],
    [0.2967136170, 0.3314158263, 96.8556112655],
    [0.3040088351, 0.3312880153, 98.2385138406],
    [0.3091707733, 0.3331150688, 99.0382986977],
    [0.3149099619, 0.3405282415, 99.4659425582],
    [0.3235097112, 0.3567617374, 99.6199325854],
    [0.3371859743, 0.3847040098, 99.5176371579],
    [0.3557776967, 0.4216923966, 99.1510708879],
    [0.3783883809, 0.4631133894, 98.5099898065],
    [0.4007208009, 0.4984946899, 97.5358662789],
    [0.4200671230, 0.5212867242, 96.0170326216],
    [0.4354651980, 0.5305547459, 93.8786518226],
    [0.4510116507, 0.5302583167, 90.5381460480],
    [0.4692576682, 0.5210766237, 85.4078945378],
    [0.4907098570, 0.5040904410, 78.3679877518],
    [0.5160438223, 0.4813362160, 69.5843541671],
    [0.5431410753, 0.4555096132, 60.1595897333],
    [0.5719973272, 0.4269636689, 50.3641610877],
    [0.6006222530, 0.3975396681, 40.9496139600],
    [0.6253129590, 0.3667162996, 32.2746594549],
    [0.6366707338, 0.3297829524, 24.3995234913],
    [0.6017379045, 0.2742089836, 18.0822514425],
    [0.5047516994, 0.1960545479, 12.8032854530],
    [0.3795466141, 0.1191857650, 8.7669271611],
    [0.2819679450, 0.0692107371, 6.0259399592],
    [0.2218894039, 0.0449687035, 4.6063068809],
    [0.1858946688, 0.0367266447, 4.2091376169],
    [0.1640969181, 0.0399849978, 4.9238148769],
    [0.1498594040, 0.0513072816, 6.6026266674],
    [0.1392544668, 0.0723749045, 9.6957649567],
    [0.1311434002, 0.1047565659, 14.7008089047],
    [0.1270851112, 0.1459678198, 21.6868148701],
    [0.1285759092, 0.1910226657, 30.4428429593],
    [0.1357285516, 0.2319642232, 39.8529866297],
    [0.1482773265, 0.2669915667, 49.6424964615],
    [0.1651043615, 0.2938059459, 59.0542254045],
    [0.1852316599, 0.3126481878, 67.7305116854],
    [0.2080026067, 0.3247553753, 75.6154003372],
    [0.2301860839, 0.3307666715, 81.9677727090],
    [0.2520181286, 0.3330623935, 87.3416956811],
    [0.2863339231, 0.3322163307, 94.7679069237],
    [0.2966605457, 0.3312748498, 96.8562317945],
    [0.3037245803, 0.3305777885, 98.2416147843],
    [0.3081753362, 0.3307224516, 99.0487734796],
    [0.3115836891, 0.3327533359, 99.5013064199],
    [0.3162331257, 0.3402981727, 99.7150792115],
    [0.3242019869, 0.3566094383, 99.7458622412],
    [0.3374988470, 0.3846102008, 99.5718015172],
    [0.3559464496, 0.4216227506, 99.1788660268],
    [0.3784812260, 0.4630618472, 98.5247005337],
    [0.4007600558, 0.4984672820, 97.5419695206],
    [0.4200892612, 0.5212687126, 96.0204713353],
    [0.4354764849, 0.5305447401, 93.8804209906],
    [0.4510161667, 0.5302540990, 90.5388681415],
    [0.4692592746, 0.5210750758, 85.4081580765],
    [0.4907109772, 0.5040893447, 78.3681773952],
    [0.5160443444, 0.4813357000, 69.5844441309],
    [0.5430372867, 0.4553828981, 60.1597741613],
    [0.5715716267, 0.4265124692, 50.3647816167],
    [0.5979573652, 0.3950902142, 40.9527149037],
    [0.6143572079, 0.3579582839, 32.2851342367],
    [0.5968178584, 0.3019718985, 24.4348873531],
    [0.5268790741, 0.2279806375, 18.1773980686],
    [0.4218794048, 0.1509593429, 13.0315105364],
    [0.3251176694, 0.0944062191, 9.1876577904],
    [0.2536086064, 0.0610922382, 6.6948161795],
    [0.2078976999, 0.0468053115, 5.5951411357],
    [0.1772736161, 0.0454729343, 5.7340745158],
    [0.1574871917, 0.0541832518, 7.0656343896],
    [0.1433391474, 0.0737230419, 9.9449016100],
    [0.1331639516, 0.1052994732, 14.8267385605],
    [0.1279175302, 0.1461318104, 21.7409792294],
    [0.1289740874, 0.1910714697, 30.4706380982],
    [0.1359217803, 0.2319749847, 39.8676973569],
    [0.1483498617, 0.2669913615, 49.6485997032],
    [0.1651410891, 0.2938041082, 59.0576641182],
    [0.1852485852, 0.3126467259, 67.7322808534],
    [0.2080087570, 0.3247546829, 75.6161224308],
    [0.2301881041, 0.3307664100, 81.9680362478],
    [0.2520194429, 0.3330622094, 87.3418853245],
    [0.2712272402, 0.3331064186, 91.6062790564],
    [0.2966449742, 0.3312333872, 96.8564162224],
    [0.3036694127, 0.3304395072, 98.2422353133],
    [0.3078849077, 0.3300204403, 99.0518744233],
    [0.3105764345, 0.3303769600, 99.5117812018],
    [0.3128865866, 0.3325526787, 99.7504430733],
    [0.3169045889, 0.3401795271, 99.8410088673],
    [0.3245008236, 0.3565431418, 99.8000266006],
    [0.3376595101, 0.3845619449, 99.5995966561],
    [0.3560356971, 0.4215859185, 99.1935767540],
    [0.3785197291, 0.4630404729, 98.5308037755],
    [0.4007821727, 0.4984518394, 97.5454082343],
    [0.4201006601, 0.5212594375, 96.0222405033],
    [0.4354810813, 0.5305406660, 93.8811430842],
    [0.4510178149, 0.5302525598, 90.5391316803],
    [0.4692604306, 0.5210739619, 85.4083477200],
    [0.4907115185, 0.5040888149, 78.3682673590],
    [0.5159564860, 0.4812132978, 69.5846285588],
    [0.5426847841, 0.4549528460, 60.1603946903],
    [0.5694033228, 0.4242163162, 50.3678825604],
    [0.5891851610, 0.3870416340, 40.9631896856],
    [0.5827464842, 0.3327770157, 32.3204980985],
    [0.5345115833, 0.2590107330, 24.5300339791],
    [0.4512574796, 0.1826822267, 18.4056231519],
    [0.3646250638, 0.1221950362, 13.4522411657],
    [0.2910766646, 0.0822479240, 9.8565340107],
    [0.2361237305, 0.0606480311, 7.6836504344],
    [0.1976715903, 0.0543383989, 7.1200780347],
    [0.1700930231, 0.0590575609, 7.8758940286],
    [0.1507021687, 0.0761869799, 10.4079093322],
    [0.1370914665, 0.1063666137, 15.0758752138],
    [0.1298339832, 0.1465130479, 21.8669088852],
    [0.1297472711, 0.1911666635, 30.5248024575],
    [0.1362865535, 0.2319952943, 39.8954924958],
    [0.1485246302, 0.2669908638, 49.6633104304],
    [0.1652062545, 0.2938008504, 59.0637673599],
    [0.1852814556, 0.3126438937, 67.7357195671],
    [0.2080238517, 0.3247529758, 75.6178915988],
    [0.2301936393, 0.3307656935, 81.9687583413],
    [0.2520212693, 0.3330619536, 87.3421488633],
    [0.2712284436, 0.3331062429, 91.6064686998],
    [0.2863344630, 0.3322162479, 94.7679968875],
    [0.3036532237, 0.3303988370, 98.2424197413],
    [0.3078285342, 0.3298837552, 99.0524949523],
    [0.3102825134, 0.3296796763, 99.5148821455],
    [0.3118730192, 0.3301850637, 99.7609178551],
    [0.3135478204, 0.3324489493, 99.8763727291],
    [0.3171944624, 0.3401277510, 99.8951732266],
    [0.3246542892, 0.3565090092, 99.8278217395],
    [0.3377444845, 0.3845364237, 99.6143073833],
    [0.3560727096, 0.4215706442, 99.1996799957],
    [0.3785414227, 0.4630284295, 98.5342424892],
    [0.4007935605, 0.4984438868, 97.5471774023],
    [0.4201053023, 0.5212556611, 96.0229625969],
    [0.4354827588, 0.5305391792, 93.8814066229],
    [0.4510190009, 0.5302514521, 90.5393213237],
    [0.4692609887, 0.5210734240, 85.4084376837],
    [0.4906358714, 0.5039695559, 78.3684517869],
    [0.5156580364, 0.4807978409, 69.5852490878],
    [0.5408878976, 0.4527628255, 60.1634956340],
    [0.5622403929, 0.4166456208, 50.3783573423],
    [0.5635069423, 0.3635661723, 40.9985535473],
    [0.5312933964, 0.2922633081, 32.4156447245],
    [0.4672887134, 0.2139375733, 24.7582590625],
    [0.3950303697, 0.1511965423, 18.8263537812],
    [0.3271526334, 0.1064883871, 14.1211173860],
    [0.2702205301, 0.0791942446, 10.8453682656],
    [0.2240795887, 0.0666400742, 9.2085873334],
    [0.1896761784, 0.0669729252, 9.2618975475],
    [0.1628910880, 0.0803782920, 11.2181689712],
    [0.1441781014, 0.1083228856, 15.5388829360],
    [0.1335612947, 0.1472650826, 22.1160455386],
    [0.1315278912, 0.1913891161, 30.6507321133],
    [0.1369949665, 0.2320351085, 39.9496568551],
    [0.1488545779, 0.2669899191, 49.6911055693],
    [0.1653632713, 0.2937929980, 59.0784780871],
    [0.1853397779, 0.3126388711, 67.7418228088],
    [0.2080531668, 0.3247496669, 75.6213303125],
    [0.2302072246, 0.3307639277, 81.9705275094],
    [0.2520262735, 0.3330612527, 87.3428709569],
    [0.2712301158, 0.3331059989, 91.6067322386],
    [0.2863355852, 0.3322160808, 94.7681865309],
    [0.2966454888, 0.3312333076, 96.8565061862],
    [0.3078119901, 0.3298435541, 99.0526793802],
    [0.3102254577, 0.3295439098, 99.5155026745],
    [0.3115772321, 0.3294903305, 99.7640187988],
    [0.3125310661, 0.3300857784, 99.8868475109],
    [0.3138332878, 0.3324036107, 99.9305370884],
    [0.3173433307, 0.3401010737, 99.9229683655],
    [0.3247354607, 0.3564909571, 99.8425324667],
    [0.3377797261, 0.3845258399, 99.6204106250],
    [0.3560935636, 0.4215620373, 99.2031187094],
    [0.3785525923, 0.4630222267, 98.5360116572],
    [0.4007981985, 0.4984406493, 97.5478994959],
    [0.4201069965, 0.5212542829, 96.0232261357],
    [0.4354839659, 0.5305381092, 93.8815962664],
    [0.4510195731, 0.5302509174, 90.5394112875],
    [0.4691940990, 0.5209564577, 85.4086221117],
    [0.4903788640, 0.5035647374, 78.3690723159],
    [0.5141357695, 0.4786811129, 69.5883500315],
    [0.5349361516, 0.4455239361, 60.1739704158],
    [0.5410513630, 0.3943337705, 50.4137212041],
    [0.5205104151, 0.3247059265, 41.0937001734],
    [0.4728405400, 0.2474287672, 32.6438698079],
    [0.4143665557, 0.1805072315, 25.1789896918],
    [0.3565781777, 0.1325894023, 19.4952300015],
    [0.3039529095, 0.1009252895, 15.1099516408],
    [0.2563687536, 0.0833365941, 12.3703051645],
    [0.2151589669, 0.0780392078, 11.3504068461],
    [0.1818788696, 0.0872256926, 12.6041724901],
    [0.1559293688, 0.1116693255, 16.3491425750],
    [0.1402938477, 0.1486509264, 22.5790532608],
    [0.1349932065, 0.1918312800, 30.8998687667],
    [0.1386268903, 0.2321296381, 40.0755865109],
    [0.1494954382, 0.2669884087, 49.7452699286],
    [0.1656597245, 0.2937781680, 59.1062732260],
    [0.1854803104, 0.3126267664, 67.7565335360],
    [0.2081051814, 0.3247437982, 75.6274335542],
    [0.2302336083, 0.3307605044, 81.9739662231],
    [0.2520385560, 0.3330595257, 87.3446401249],
    [0.2712346978, 0.3331053301, 91.6074543322],
    [0.2863371448, 0.3322158486, 94.7684500697],
    [0.2966465584, 0.3312331470, 96.8566958296],
    [0.3036537217, 0.3303987596, 98.2425097051],
    [0.3102087126, 0.3295039788, 99.5156871024],
    [0.3115198120, 0.3293550595, 99.7646393278],
    [0.3122343370, 0.3293923391, 99.8899484546],
    [0.3128151606, 0.3300423581, 99.9410118703],
    [0.3139798960, 0.3323802390, 99.9583322273],
    [0.3174220728, 0.3400869645, 99.9376790927],
    [0.3247691259, 0.3564834708, 99.8486357084],
    [0.3377995825, 0.3845198757, 99.6238493387],
    [0.3561043008, 0.4215576037, 99.2048878775],
    [0.3785571417, 0.4630197021, 98.5367337508],
    [0.4007998911, 0.4984394677, 97.5481630347],
    [0.4201082157, 0.5212532911, 96.0234157791],
    [0.4354845481, 0.5305375927, 93.8816862301],
    [0.4509593307, 0.5301366387, 90.5395957155],
    [0.4689668154, 0.5205594018, 85.4092426407],
    [0.4890673454, 0.5015014666, 78.3721732596],
    [0.5090836811, 0.4716718078, 69.5988248134],
    [0.5171913231, 0.4240257482, 60.2093342776],
    [0.5048181612, 0.3566149532, 50.5088678301],
    [0.4697898531, 0.2800032431, 41.3219252568],
    [0.4245794915, 0.2123663603, 33.0646004372],
    [0.3767808050, 0.1595458326, 25.8478659121],
    [0.3323508518, 0.1247949918, 20.4840642564],
    [0.2887936318, 0.1031904743, 16.6348885398],
    [0.2465298197, 0.0932063701, 14.5121246773],
    [0.2066862946, 0.0968839052, 14.6926817887],
    [0.1742859709, 0.1171872123, 17.7351460939],
    [0.1514785341, 0.1510447794, 23.3893128997],
    [0.1412598961, 0.1926549324, 31.3628764889],
    [0.1418047409, 0.2323217824, 40.3247231642],
    [0.1509721336, 0.2669873835, 49.8711995844],
    [0.1662355912, 0.2937496462, 59.1604375854],
    [0.1857456560, 0.3126039069, 67.7843286749],
    [0.2082305181, 0.3247296543, 75.6421442814],
    [0.2302804220, 0.3307544324, 81.9800694648],
    [0.2520624094, 0.3330561773, 87.3480788386],
    [0.2712459441, 0.3331036822, 91.6092235002],
    [0.2863414180, 0.3322152124, 94.7691721633],
    [0.2966480449, 0.3312329238, 96.8569593684],
    [0.3036547568, 0.3303986037, 98.2426993485],
    [0.3078124785, 0.3298434782, 99.0527693440],
    [0.3115029595, 0.3293152742, 99.7648237558],
    [0.3121767328, 0.3292573195, 99.8905689836],
    [0.3125180257, 0.3293494772, 99.9441128140],
    [0.3129610646, 0.3300199714, 99.9688070092],
    [0.3140574436, 0.3323678780, 99.9730429545],
    [0.3174547308, 0.3400811134, 99.9437823345],
    [0.3247880943, 0.3564792517, 99.8520744221],
    [0.3378098059, 0.3845168026, 99.6256185067],
    [0.3561086743, 0.4215557999, 99.2056099710],
    [0.3785588020, 0.4630187807, 98.5369972895],
    [0.4008011092, 0.4984386174, 97.5483526781],
    [0.4201088035, 0.5212528122, 96.0235057429],
    [0.4354296796, 0.5304272619, 93.8818706581],
    [0.4507546115, 0.5297486915, 90.5402162445],
    [0.4678065607, 0.5185351952, 85.4123435844],
    [0.4847080646, 0.4946599904, 78.3826480415],
    [0.4939338437, 0.4507391713, 69.6341886752],
    [0.4863609735, 0.3871046585, 60.3044809037],
    [0.4608271561, 0.3119324352, 50.7370929135],
    [0.4263583820, 0.2436243630, 41.7426558860],
    [0.3891210893, 0.1892854223, 33.7334766575],
    [0.3526494041, 0.1498284804, 26.8367001669],
    [0.3165788040, 0.1253123400, 22.0090011553],
    [0.2783028459, 0.1114565243, 18.7767080526],
    [0.2373909770, 0.1102760748, 17.8543996199],
    [0.1983654718, 0.1250766546, 19.8236553925],
    [0.1690025446, 0.1550553142, 24.7753164186],
    [0.1516918316, 0.1941063085, 32.1731361278],
    [0.1475581156, 0.2326906507, 40.7877308864],
    [0.1538493260, 0.2669924311, 50.1203362378],
    [0.1675628205, 0.2936860752, 59.2863672412],
    [0.1862611425, 0.3125597530, 67.8384930342],
    [0.2084671844, 0.3247029437, 75.6699394203],
    [0.2303932287, 0.3307397986, 81.9947801920],
    [0.2521047336, 0.3330502379, 87.3541820803],
    [0.2712677849, 0.3331004871, 91.6126622139],
    [0.2863519068, 0.3322136445, 94.7709413313],
    [0.2966521176, 0.3312323123, 96.8576814620],
    [0.3036561952, 0.3303983870, 98.2429628873],
    [0.3078134934, 0.3298433251, 99.0529589874],
    [0.3102091955, 0.3295039037, 99.5157770662],
    [0.3121598261, 0.3292176081, 99.8907534116],
    [0.3124603422, 0.3292145662, 99.9447333430],
    [0.3126637216, 0.3293273773, 99.9719079529],
    [0.3130382401, 0.3300081314, 99.9835177364],
    [0.3140896065, 0.3323627520, 99.9791461962],
    [0.3174731318, 0.3400778156, 99.9472210482],
    [0.3247978604, 0.3564770771, 99.8538435901],
    [0.3378139704, 0.3845155531, 99.6263406003],
    [0.3561102705, 0.4215551416, 99.2058735098],
    [0.3785599968, 0.4630181177, 98.5371869330],
    [0.4008016962, 0.4984382064, 97.5484426419],
    [0.4200591978, 0.5211487015, 96.0236901708],
    [0.4352432040, 0.5300527040, 93.8824911871],
    [0.4497092408, 0.5277705578, 90.5433171882],
    [0.4639458408, 0.5118170761, 85.4228183662],
    [0.4715782094, 0.4741435195, 78.4180119033],
    [0.4672983435, 0.4143704838, 69.7293353012],
    [0.4480848331, 0.3423731106, 60.5327059870],
    [0.4220509552, 0.2744257080, 51.1578235428],
    [0.3935547940, 0.2187750738, 42.4115321063],
    [0.3659110536, 0.1777696000, 34.7223109124],
    [0.3368926650, 0.1487959550, 28.3616370659],
    [0.3058124908, 0.1320480778, 24.1508206681],
    [0.2687028652, 0.1266299500, 22.1189829952],
    [0.2283312530, 0.1362128689, 22.9853732237],
    [0.1920904762, 0.1609233898, 26.8638257173],
    [0.1680905902, 0.1966160543, 33.5591396467],
    [0.1571543192, 0.2333760989, 41.5979905254],
    [0.1590639559, 0.2670199340, 50.5833439600],
    [0.1701500542, 0.2935683662, 59.5355038945],
    [0.1874494237, 0.3124599034, 67.9644226900],
    [0.2089269903, 0.3246512795, 75.7241037796],
    [0.2306062443, 0.3307121619, 82.0225753309],
    [0.2522067240, 0.3330359237, 87.3688928075],
    [0.2713065384, 0.3330948197, 91.6187654556],
    [0.2863722763, 0.3322106047, 94.7743800450],
    [0.2966621146, 0.3312308052, 96.8594506300],
    [0.3036601363, 0.3303977932, 98.2436849809],
    [0.3078149039, 0.3298431124, 99.0532225262],
    [0.3102101991, 0.3295037523, 99.5159667096],
    [0.3115034394, 0.3293151996, 99.7649137195],
    [0.3124434122, 0.3291748867, 99.9449177709],
    [0.3126059974, 0.3291925220, 99.9725284819],
    [0.3127407870, 0.3293156891, 99.9866186801],
    [0.3130702486, 0.3300032214, 99.9896209781],
    [0.3141077285, 0.3323598628, 99.9825849099],
    [0.3174826059, 0.3400761153, 99.9489902162],
    [0.3248018387, 0.3564761936, 99.8545656837],
    [0.3378154902, 0.3845150971, 99.6266041391],
    [0.3561114191, 0.4215546679, 99.2060631532],
    [0.3785605723, 0.4630177966, 98.5372768967],
    [0.4007586674, 0.4983445382, 97.5486270698],
    [0.4198905896, 0.5207952468, 96.0243106998],
    [0.4342907467, 0.5281425405, 93.8855921308],
    [0.4462278468, 0.5212008925, 90.5537919700],
    [0.4522815776, 0.4916130416, 85.4581822280],
    [0.4482834335, 0.4381861273, 78.5131585293],
    [0.4336653171, 0.3695637428, 69.9575603846],
    [0.4135538822, 0.3039056550, 60.9534366163],
    [0.3920788237, 0.2480499040, 51.8266997631],
    [0.3717063725, 0.2057219101, 43.4003663612],
    [0.3506521341, 0.1752654553, 36.2472478113],
    [0.3261956934, 0.1541601850, 30.5034565787],
    [0.2960418972, 0.1453879023, 27.4930956107],
    [0.2591005492, 0.1501261035, 27.2499565990],
    [0.2209914585, 0.1694544954, 30.0255435484],
    [0.1898000907, 0.2004530716, 35.6476489454],
    [0.1722874164, 0.2346570032, 42.9839940443],
    [0.1677775818, 0.2671273349, 51.3936035989],
    [0.1748435775, 0.2933710287, 59.9985116167],
    [0.1897667405, 0.3122707320, 68.2135593434],
    [0.2099870664, 0.3245339146, 75.8500334354],
    [0.2310201235, 0.3306586777, 82.0767396902],
    [0.2523993219, 0.3330088897, 87.3966879464],
    [0.2713999255, 0.3330811608, 91.6334761828],
    [0.2864084192, 0.3322052128, 94.7804832867],
    [0.2966815290, 0.3312278833, 96.8628893437],
    [0.3036698101, 0.3303963299, 98.2454541489],
    [0.3078187685, 0.3298425295, 99.0539446198],
    [0.3102115937, 0.3295035419, 99.5162302484],
    [0.3115044369, 0.3293150491, 99.7651033630],
    [0.3121603046, 0.3292175337, 99.8908433754],
    [0.3125890554, 0.3291528589, 99.9727129098],
    [0.3126830413, 0.3291808632, 99.9872392091],
    [0.3127727499, 0.3293108420, 99.9927219218],
    [0.3130882837, 0.3300004540, 99.9930596918],
    [0.3141170589, 0.3323583729, 99.9843540779],
    [0.3174864652, 0.3400754251, 99.9497123098],
    [0.3248032906, 0.3564758711, 99.8548292225],
    [0.3378165839, 0.3845147689, 99.6267937825],
    [0.3561119721, 0.4215544378, 99.2061531170],
    [0.3785248842, 0.4629378396, 98.5374613247],
    [0.4006123905, 0.4980265176, 97.5492475988],
    [0.4190291504, 0.5189923887, 96.0274116435],
    [0.4311164560, 0.5217949919, 93.8960669126],
    [0.4356848695, 0.5014017188, 90.5891558318],
    [0.4314532999, 0.4559899357, 85.5533288541],
    [0.4184780673, 0.3933183737, 78.7413836127],
    [0.4027676024, 0.3303194102, 70.3782910139],
    [0.3863404490, 0.2762269578, 61.6223128366],
    [0.3717994329, 0.2336518738, 52.8155340179],
    [0.3572211602, 0.2019499429, 44.9253032602],
    [0.3402982484, 0.1793258080, 38.3890673241],
    [0.3165220236, 0.1658485778, 33.8457315213],
    [0.2861923099, 0.1664992218, 32.6240692145],
    [0.2508864222, 0.1805149915, 34.2901269237],
    [0.2171511069, 0.2063347844, 38.8093667765],
    [0.1924140802, 0.2368127226, 45.0725033429],
    [0.1815599691, 0.2674725504, 52.7796071178],
    [0.1826990540, 0.2930950446, 60.8087712556],
    [0.1939739678, 0.3119417585, 68.6765670655],
    [0.2120550545, 0.3243099754, 76.0991700888],
    [0.2319744051, 0.3305369687, 82.2026693460],
    [0.2527735460, 0.3329565602, 87.4508523057],
    [0.2715762821, 0.3330553639, 91.6612713217],
    [0.2864955164, 0.3321922175, 94.7951940139],
    [0.2967159773, 0.3312227005, 96.8689925854],
    [0.3036885970, 0.3303934928, 98.2488928626],
    [0.3078282548, 0.3298410929, 99.0557137878],
    [0.3102154148, 0.3295029653, 99.5169523420],
    [0.3115058229, 0.3293148399, 99.7653669017],
    [0.3121612989, 0.3292173836, 99.8910330188],
    [0.3124438900, 0.3291748123, 99.9450077347],
    [0.3126660930, 0.3291412088, 99.9874236370],
    [0.3127149953, 0.3291760284, 99.9933424508],
    [0.3127907593, 0.3293081100, 99.9961606355],
    [0.3130975693, 0.3299990267, 99.9948288598],
    [0.3141208597, 0.3323577683, 99.9850761715],
    [0.3174878737, 0.3400751731, 99.9499758485],
    [0.3248043354, 0.3564756391, 99.8550188659],
    [0.3378171104, 0.3845146088, 99.6268837463],
    [0.3560832421, 0.4214886758, 99.2063375450],
    [0.3784035357, 0.4626663504, 98.5380818537],
    [0.3998647420, 0.4964039823, 97.5523485425],
    [0.4161559021, 0.5129977090, 96.0378864254],
    [0.4214841464, 0.5026314481, 93.9314307744],
    [0.4167660114, 0.4663374551, 90.6843024578],
    [0.4045497032, 0.4111442469, 85.7815539374],
    [0.3906955618, 0.3534634995, 79.1621142420],
    [0.3780285231, 0.3015838350, 71.0471672342],
    [0.3676643718, 0.2606702455, 62.6111470915],
    [0.3582291658, 0.2287681408, 54.3404709169],
    [0.3473647553, 0.2048903299, 47.0671227729],
    [0.3309388483, 0.1894451369, 41.7313422667],
    [0.3067075978, 0.1847975512, 38.9767051251],
    [0.2774388150, 0.1940665636, 39.6642395392],
    [0.2456678823, 0.2144507068, 43.0739501518],
    [0.2179277737, 0.2404693424, 48.2342211741],
    [0.1999696265, 0.2683313598, 54.8681164165],
    [0.1951565186, 0.2928126013, 62.1947747745],
    [0.2010250957, 0.3114389976, 69.4868267045],
    [0.2158121365, 0.3239162216, 76.5621778110],
    [0.2338364588, 0.3303041081, 82.4518059993],
    [0.2536364483, 0.3328373994, 87.5767819615],
    [0.2719189589, 0.3330054258, 91.7154356810],
    [0.2866599984, 0.3321676734, 94.8229891528],
    [0.2967989912, 0.3312102092, 96.8837033126],
    [0.3037219318, 0.3303884605, 98.2549961043],
    [0.3078466772, 0.3298383078, 99.0591525015],
    [0.3102247942, 0.3295015444, 99.5187215100],
    [0.3115096207, 0.3293142669, 99.7660889953],
    [0.3121626807, 0.3292171751, 99.8912965576],
    [0.3124448830, 0.3291746625, 99.9451973781],
    [0.3125895329, 0.3291527846, 99.9728028736],
    [0.3126980444, 0.3291363775, 99.9935268787],
    [0.3127329997, 0.3291733033, 99.9967811645],
    [0.3128000317, 0.3293067010, 99.9979298035],
    [0.3131013519, 0.3299984477, 99.9955509534],
    [0.3141222469, 0.3323575476, 99.9853397103],
    [0.3174888873, 0.3400749919, 99.9501654920],
    [0.3248048383, 0.3564755252, 99.8551088297],
    [0.3377936382, 0.3844601882, 99.6270681742],
    [0.3559855273, 0.4212653664, 99.2069580740],
    [0.3777829669, 0.4612807541, 98.5411827974],
    [0.3973681674, 0.4910041075, 97.5628233244],
    [0.4074179655, 0.4948649744, 96.0732502872],
    [0.4041263294, 0.4685673713, 94.0265774005],
    [0.3921490962, 0.4219058286, 90.9125275412],
    [0.3792007491, 0.3709146159, 86.2022845667],
    [0.3681534209, 0.3238841914, 79.8309904623],
    [0.3608386252, 0.2850796592, 72.0360014890],
    [0.3550457986, 0.2548274587, 64.1360839904],
    [0.3489499390, 0.2307319577, 56.4822904297],
    [0.3384400455, 0.2136660128, 50.4093977156],
    [0.3213905606, 0.2063314484, 46.8623158705],
    [0.2977619929, 0.2097786950, 46.0168754498],
    [0.2712256490, 0.2250419286, 48.4480627673],
    [0.2447280622, 0.2460672291, 52.4988045494],
    [0.2234413745, 0.2702419590, 58.0298342476],
    [0.2118590469, 0.2927870149, 64.2832840732],
    [0.2122315159, 0.3107790826, 70.8728302234],
    [0.2221159574, 0.3232995483, 77.3724374499],
    [0.2372211045, 0.3298929213, 82.9148137215],
    [0.2553205003, 0.3326091634, 87.8259186149],
    [0.2727091461, 0.3328916959, 91.8413653368],
    [0.2869796077, 0.3321201615, 94.8771535122],
    [0.2969557643, 0.3311866165, 96.9114984515],
    [0.3038022629, 0.3303763320, 98.2697068315],
    [0.3078793653, 0.3298333675, 99.0652557432],
    [0.3102430092, 0.3294987896, 99.5221602237],
    [0.3115189428, 0.3293128545, 99.7678581633],
    [0.3121664667, 0.3292166038, 99.8920186511],
    [0.3124462629, 0.3291744543, 99.9454609169],
    [0.3125905252, 0.3291526349, 99.9729925170],
    [0.3126665703, 0.3291411345, 99.9875136008],
    [0.3127160473, 0.3291336544, 99.9969655924],
    [0.3127422695, 0.3291718978, 99.9985503325],
    [0.3128038089, 0.3293061293, 99.9986518971],
    [0.3131027324, 0.3299982363, 99.9958144921],
    [0.3141232451, 0.3323573888, 99.9855293537],
    [0.3174893750, 0.3400749024, 99.9502554557],
    [0.3247848529, 0.3564289065, 99.8552932576],
    [0.3377137855, 0.3842753774, 99.6276887032],
    [0.3554855079, 0.4201252408, 99.2100590177],
    [0.3757076193, 0.4566641457, 98.5516575792],
    [0.3897518076, 0.4746260232, 97.5981871861],
    [0.3915990949, 0.4625054686, 96.1683969132],
    [0.3813971801, 0.4251684467, 94.2548024838],
    [0.3687565536, 0.3817573704, 91.3332581705],
    [0.3584206392, 0.3407734628, 86.8711607870],
    [0.3523152674, 0.3066151792, 80.8198247171],
    [0.3491137596, 0.2784514294, 73.5609383880],
    [0.3463628683, 0.2559532491, 66.2779035032],
    [0.3405221239, 0.2383414104, 59.8245653723],
    [0.3292957281, 0.2287817536, 55.5403713193],
    [0.3125340870, 0.2288221516, 53.9024861952],
    [0.2909908389, 0.2379958667, 54.8006986779],
    [0.2689434374, 0.2540749042, 57.8729171649],
    [0.2482654064, 0.2738207892, 62.2944176229],
    [0.2332603540, 0.2934810742, 67.4450019043],
    [0.2273038870, 0.3102088899, 72.9613395221],
    [0.2321528527, 0.3224438540, 78.7584409688],
    [0.2429047657, 0.3292430615, 83.7250733605],
    [0.2583827968, 0.3322054269, 88.2889263371],
    [0.2742514757, 0.3326738046, 92.0905019902],
    [0.2877166155, 0.3320119686, 95.0030831680],
    [0.2972603976, 0.3311409483, 96.9656628108],
    [0.3039539709, 0.3303534241, 98.2975019704],
    [0.3079581384, 0.3298214608, 99.0799664704],
    [0.3102753293, 0.3294939033, 99.5282634654],
    [0.3115370466, 0.3293101162, 99.7712968770],
    [0.3121757599, 0.3292151957, 99.8937878192],
    [0.3124500438, 0.3291738838, 99.9461830105],
    [0.3125919042, 0.3291524268, 99.9732560558],
    [0.3126675623, 0.3291409848, 99.9877032442],
    [0.3126985216, 0.3291363033, 99.9936168425],
    [0.3127253163, 0.3291322500, 99.9987347604],
    [0.3127460457, 0.3291713276, 99.9992724261],
    [0.3128051874, 0.3293059207, 99.9989154358],
    [0.3131037258, 0.3299980842, 99.9960041356],
    [0.3141237254, 0.3323573102, 99.9856193175],
    [0.3174712519, 0.3400325436, 99.9504398837],
    [0.3247168482, 0.3562705812, 99.8559137866],
    [0.3373049308, 0.3833314999, 99.6307896469],
    [0.3538104516, 0.4163217401, 99.2205337995],
    [0.3693502506, 0.4426125383, 98.5870214410],
    [0.3758715788, 0.4452331005, 97.6933338122],
    [0.3707409194, 0.4210394633, 96.3966219966],
    [0.3596371964, 0.3857194779, 94.6755331131],
    [0.3494178948, 0.3514709989, 92.0021343908],
    [0.3436861424, 0.3229783452, 87.8599950419],
    [0.3414110595, 0.2993499422, 82.3447616161],
    [0.3409891859, 0.2788934598, 75.7027579008],
    [0.3384453487, 0.2625661837, 69.6201784458],
    [0.3318572955, 0.2519187063, 64.9555389761],
    [0.3207250944, 0.2491172531, 62.5805416441],
    [0.3055548629, 0.2543417606, 62.6863094233],
    [0.2878321062, 0.2645711904, 64.2255530755],
    [0.2708535894, 0.2797050383, 67.6685302384],
    [0.2560246313, 0.2956142989, 71.7095852796],
    [0.2466959567, 0.3101309100, 76.1230573532],
    [0.2456869458, 0.3215785884, 80.8469502675],
    [0.2519662338, 0.3283236822, 85.1110768794],
    [0.2635284412, 0.3315650103, 89.0991859760],
    [0.2770568601, 0.3322881771, 92.5535097123],
    [0.2891552581, 0.3318047088, 95.2522198213],
    [0.2979628757, 0.3310369707, 97.0915924666],
    [0.3042487639, 0.3303090831, 98.3516663297],
    [0.3081069048, 0.3297989717, 99.1077616093],
    [0.3103532156, 0.3294821264, 99.5429741926],
    [0.3115691693, 0.3293052592, 99.7774001188],
    [0.3121938074, 0.3292124659, 99.8972265329],
    [0.3124593245, 0.3291724776, 99.9479521785],
    [0.3125956824, 0.3291518567, 99.9739781494],
    [0.3126689407, 0.3291407768, 99.9879667830],
    [0.3126995134, 0.3291361536, 99.9938064859],
    [0.3127165245, 0.3291335802, 99.9970555562],
    [0.3127290922, 0.3291316802, 99.9994568540],
    [0.3127474239, 0.3291711195, 99.9995359649],
    [0.3128061794, 0.3293057706, 99.9991050793],
    [0.3131042039, 0.3299980088, 99.9960940993],
    [0.3141064354, 0.3323168803, 99.9858037454],
    [0.3174095755, 0.3398886810, 99.9510604127],
    [0.3243684937, 0.3554617722, 99.8590147303],
    [0.3359331505, 0.3801792624, 99.6412644288],
    [0.3486556255, 0.4047004117, 99.2558976613],
    [0.3576632749, 0.4172117820, 98.6821680671],
    [0.3573852226, 0.4072588844, 97.9215588956],
    [0.3506082010, 0.3831122161, 96.8173526259],
    [0.3415128592, 0.3558017341, 95.3444093334],
    [0.3355970454, 0.3334560926, 92.9909686457],
    [0.3334564150, 0.3152662555, 89.3849319408],
    [0.3337982320, 0.2992374556, 84.4865811289],
    [0.3335481038, 0.2846959189, 79.0450328434],
    [0.3302834933, 0.2748280173, 74.7511520496],
    [0.3236907203, 0.2703691533, 71.9957093008],
    [0.3138218055, 0.2722697245, 71.3643648722],
    [0.3018911157, 0.2784653210, 72.1111638209],
    [0.2885906026, 0.2881292906, 74.0211661490],
    [0.2768520757, 0.2999299231, 77.0836978952],
    [0.2674167548, 0.3113116438, 80.3876407285],
    [0.2631575817, 0.3210598835, 84.0086680986],
    [0.2642075693, 0.3273491959, 87.1995861780],
    [0.2717403705, 0.3306522411, 90.4851894949],
    [0.2817729379, 0.3316759391, 93.3637693513],
    [0.2917725427, 0.3314379339, 95.7152275435],
    [0.2993341765, 0.3308378292, 97.3407291200],
    [0.3049285517, 0.3302081432, 98.4775959855],
    [0.3083959826, 0.3297554428, 99.1619259687],
    [0.3105003077, 0.3294598826, 99.5707693315],
    [0.3116465800, 0.3292935530, 99.7921108460],
    [0.3122258303, 0.3292076239, 99.9033297746],
    [0.3124773478, 0.3291697514, 99.9513908922],
    [0.3126049568, 0.3291504515, 99.9757473174],
    [0.3126727176, 0.3291402069, 99.9886888766],
    [0.3127008917, 0.3291359457, 99.9940700247],
    [0.3127175162, 0.3291334306, 99.9972451996],
    [0.3127257935, 0.3291321758, 99.9988247242],
    [0.3127304702, 0.3291314723, 99.9997203928],
    [0.3127484156, 0.3291709697, 99.9997256083],
    [0.3128066568, 0.3293056961, 99.9991950430],
    [0.3130871633, 0.3299581593, 99.9962785273],
    [0.3140475905, 0.3321795664, 99.9864242744],
    [0.3170935482, 0.3391536478, 99.9541613564],
    [0.3231982934, 0.3527584316, 99.8694895122],
    [0.3316942648, 0.3705156732, 99.6766282906],
    [0.3390861559, 0.3835257719, 99.3510442874],
    [0.3418909227, 0.3840469096, 98.9103931504],
    [0.3393294347, 0.3722207478, 98.3422895248],
    [0.3337007413, 0.3541970648, 97.4862288462],
    [0.3284673268, 0.3379192183, 96.3332435883],
    [0.3259284201, 0.3255109943, 94.5159055446],
    [0.3262632720, 0.3147595968, 91.5267514536],
    [0.3267929366, 0.3043830651, 87.8288560715],
    [0.3258624472, 0.2958871856, 84.1760064472],
    [0.3225763420, 0.2916577985, 81.7913223743],
    [0.3170463164, 0.2914265555, 80.7795325289],
    [0.3099906398, 0.2942032462, 80.7892192697],
    [0.3018762340, 0.2999056917, 81.9067768944],
    [0.2932755590, 0.3067736448, 83.4363338057],
    [0.2864463315, 0.3145490068, 85.7617533440],
    [0.2818888736, 0.3216624195, 88.2732514739],
    [0.2800460108, 0.3266446718, 90.3613040092],
    [0.2828491484, 0.3296685175, 92.5736987936],
    [0.2893045543, 0.3308019473, 94.7497728702],
    [0.2961737098, 0.3308558320, 96.5254871825],
    [0.3018292352, 0.3304855199, 97.8037368422],
    [0.3062555930, 0.3300148613, 98.7267326388],
    [0.3090625916, 0.3296563623, 99.2878556245],
    [0.3107861327, 0.3294168291, 99.6249336909],
    [0.3117927741, 0.3292714425, 99.8199059849],
    [0.3123030005, 0.3291959537, 99.9180405018],
    [0.3125093277, 0.3291649158, 99.9574941339],
    [0.3126229676, 0.3291477272, 99.9791860311],
    [0.3126819886, 0.3291388022, 99.9904580446],
    [0.3127046680, 0.3291353758, 99.9947921183],
    [0.3127188943, 0.3291332226, 99.9975087384],
    [0.3127267852, 0.3291320261, 99.9990143676],
    [0.3127295694, 0.3291316060, 99.9995468178],
    [0.3127314619, 0.3291313227, 99.9999100362],
    [0.3127488928, 0.3291708955, 99.9998155721],
    [0.3127896889, 0.3292660161, 99.9993794710],
    [0.3130291665, 0.3298228161, 99.9968990563],
    [0.3137460299, 0.3314779441, 99.9895252181],
    [0.3160311751, 0.3366957427, 99.9646361382],
    [0.3195709349, 0.3444504617, 99.9048533739],
    [0.3237558663, 0.3527870040, 99.7717749166],
    [0.3259762592, 0.3555557786, 99.5792693707],
    [0.3262420177, 0.3531003341, 99.3311237797],
    [0.3239854197, 0.3453198737, 99.0111657451],
    [0.3214363794, 0.3368526103, 98.4750631010],
    [0.3192773384, 0.3299674831, 97.8581804872],
    [0.3190842390, 0.3247660417, 96.6577250574],
    [0.3196146286, 0.3194344818, 94.8690263962],
    [0.3195472979, 0.3147055192, 92.9598296753],
    [0.3186114616, 0.3113921151, 91.2161767719],
    [0.3162963277, 0.3108960296, 90.5751456024],
    [0.3132754802, 0.3113922043, 90.2043869265],
    [0.3095796782, 0.3137108318, 90.5848323433],
    [0.3056026499, 0.3168854740, 91.3219445511],
    [0.3014770231, 0.3202593856, 92.1143892546],
    [0.2991279835, 0.3242011643, 93.6473640894],
    [0.2970630178, 0.3269696425, 94.6258873845],
    [0.2972457740, 0.3289172075, 95.7354166247],
    [0.2995023264, 0.3298573595, 96.8382821689],
    [0.3032055413, 0.3300256853, 97.9114907013],
    [0.3060256009, 0.3299267687, 98.6139964811],
    [0.3086702947, 0.3296730190, 99.1897403610],
    [0.3103639238, 0.3294666700, 99.5369922778],
    [0.3114452408, 0.3293188375, 99.7508633467],
    [0.3120768544, 0.3292286476, 99.8740703442],
    [0.3124487407, 0.3291739113, 99.9458356407],
    [0.3125863944, 0.3291532613, 99.9722048611],
    [0.3126549255, 0.3291428949, 99.9852892728],
    [0.3126999928, 0.3291360789, 99.9938967583],
    [0.3127139375, 0.3291339713, 99.9965612863],
    [0.3127226703, 0.3291326528, 99.9982308320],
    [0.3127281632, 0.3291318182, 99.9992779064],
    [0.3127305610, 0.3291314564, 99.9997364612],
    [0.3127309474, 0.3291313981, 99.9998103566],
    [0.3127319391, 0.3291312484, 100.0000000000],
];
